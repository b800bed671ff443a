use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use crate::error::SendError;
use crate::types::OutgoingMessage;

pub type SendFuture = Pin<Box<dyn Future<Output = Result<(), SendError>>>>;

/// Handle to whatever delivers composed messages (a chat store, an API client).
///
/// Two handles compare equal only when they wrap the same function, which
/// keeps component props from re-rendering on every parent render.
#[derive(Clone)]
pub struct MessageSender(Rc<dyn Fn(OutgoingMessage) -> SendFuture>);

impl MessageSender {
    pub fn new<F, Fut>(send: F) -> Self
    where
        F: Fn(OutgoingMessage) -> Fut + 'static,
        Fut: Future<Output = Result<(), SendError>> + 'static,
    {
        Self(Rc::new(move |message| Box::pin(send(message)) as SendFuture))
    }

    pub fn send(&self, message: OutgoingMessage) -> SendFuture {
        (self.0)(message)
    }
}

impl PartialEq for MessageSender {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for MessageSender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSender").finish_non_exhaustive()
    }
}
