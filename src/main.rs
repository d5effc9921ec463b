use std::rc::Rc;

use futures::{executor::block_on, Stream, StreamExt};
use rx_observable::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rx_observable=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let document = Rc::new(EventEmitter::new());
    let moves = Observable::<PointerEvent, String>::from_event(Rc::clone(&document), "mousemove");

    let unsub_client_x = moves.map(|event| event.client_x).subscribe(observer(
        |client_x: i32| tracing::info!(client_x, "pointer moved"),
        || tracing::info!("pointer stream completed"),
        |err: String| tracing::error!(%err, "pointer stream failed"),
    ));

    let distance = moves.pipe(pipeline![
        |event: PointerEvent| (event.client_x, event.client_y),
        |(x, y): (i32, i32)| x * x + y * y,
        |squared: i32| f64::from(squared).sqrt(),
    ]);
    let mut distances = distance.into_stream();

    for (client_x, client_y) in [(3, 4), (6, 8), (5, 12)] {
        document.dispatch("mousemove", &PointerEvent { client_x, client_y });
    }

    unsub_client_x.unsubscribe();

    document.dispatch(
        "mousemove",
        &PointerEvent {
            client_x: 8,
            client_y: 15,
        },
    );

    block_on(async {
        let pending = distances.size_hint().0;
        let received = distances.by_ref().take(pending).collect::<Vec<_>>().await;

        println!("{received:?}");
    });

    drop(distances);

    println!(
        "listeners left: {}",
        document.listener_count("mousemove")
    );
}

#[derive(Debug, Clone)]
struct PointerEvent {
    client_x: i32,
    client_y: i32,
}
