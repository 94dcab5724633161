use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// A pass was started while another pass was still running on this
    /// thread. Composition is strictly single-threaded and non-reentrant.
    #[error("a composition pass is already in progress on this thread")]
    AlreadyComposing,
}
