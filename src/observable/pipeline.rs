use std::{fmt, rc::Rc};

/// An ordered chain of unary transforms, folded into a single function.
///
/// Adjacent stages are type checked as they are added with [`then`](Pipeline::then),
/// or through the [`pipeline!`](crate::pipeline!) macro. A pipeline without
/// stages is the identity.
pub struct Pipeline<A, B> {
    stages: usize,
    run: Rc<dyn Fn(A) -> B>,
}

impl<A: 'static> Pipeline<A, A> {
    pub fn new() -> Self {
        Self {
            stages: 0,
            run: Rc::new(|value| value),
        }
    }
}

impl<A: 'static> Default for Pipeline<A, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: 'static, B: 'static> Pipeline<A, B> {
    /// Appends a stage receiving the output of the previous one.
    pub fn then<C, F>(self, f: F) -> Pipeline<A, C>
    where
        C: 'static,
        F: Fn(B) -> C + 'static,
    {
        let run = self.run;

        Pipeline {
            stages: self.stages + 1,
            run: Rc::new(move |value| f(run(value))),
        }
    }

    pub fn apply(&self, value: A) -> B {
        (self.run)(value)
    }

    pub fn len(&self) -> usize {
        self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages == 0
    }

    pub(crate) fn into_fn(self) -> Rc<dyn Fn(A) -> B> {
        self.run
    }
}

impl<A, B> Clone for Pipeline<A, B> {
    fn clone(&self) -> Self {
        Self {
            stages: self.stages,
            run: Rc::clone(&self.run),
        }
    }
}

impl<A: 'static, F> FromIterator<F> for Pipeline<A, A>
where
    F: Fn(A) -> A + 'static,
{
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Pipeline::<A, A>::new(), |pipeline, stage| pipeline.then(stage))
    }
}

impl<A, B> fmt::Debug for Pipeline<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages)
            .finish()
    }
}

/// Builds a [`Pipeline`] from a list of transforms, applied left to right.
///
/// ```
/// use rx_observable::pipeline;
///
/// let pipeline = pipeline![|x: i32| x + 1, |x: i32| x * 2, |x: i32| x.to_string()];
///
/// assert_eq!(pipeline.apply(3), "8");
/// ```
#[macro_export]
macro_rules! pipeline {
    () => {
        $crate::Pipeline::new()
    };
    ($($stage:expr),+ $(,)?) => {
        $crate::Pipeline::new()$(.then($stage))+
    };
}
