//! Bridge from the media clock's event channel to an iced subscription
//!
//! ```ignore
//! fn subscription(&self) -> Subscription<Message> {
//!     media_events(self.media.events()).map(Message::Media)
//! }
//! ```

use std::any::TypeId;
use std::hash::Hash;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use iced::advanced::subscription::{self, EventStream, Hasher, Recipe};
use iced::futures::stream::BoxStream;
use iced::Subscription;
use seekmark_core::media::MediaEvent;

/// Poll period while the channel is empty
const POLL_INTERVAL: Duration = Duration::from_millis(2);

struct MediaEventRecipe {
    /// Receiver address, so each media element gets its own subscription
    id: usize,
    receiver: Arc<Mutex<Receiver<MediaEvent>>>,
}

impl Recipe for MediaEventRecipe {
    type Output = MediaEvent;

    fn hash(&self, state: &mut Hasher) {
        TypeId::of::<Self>().hash(state);
        self.id.hash(state);
    }

    fn stream(self: Box<Self>, _input: EventStream) -> BoxStream<'static, Self::Output> {
        Box::pin(iced::futures::stream::unfold(
            self.receiver,
            |receiver| async move {
                loop {
                    let next = match receiver.lock() {
                        Ok(rx) => rx.try_recv(),
                        Err(_) => Err(TryRecvError::Disconnected),
                    };
                    match next {
                        Ok(event) => return Some((event, receiver)),
                        Err(TryRecvError::Disconnected) => {
                            log::debug!("media_events: channel closed");
                            return None;
                        }
                        Err(TryRecvError::Empty) => tokio::time::sleep(POLL_INTERVAL).await,
                    }
                }
            },
        ))
    }
}

/// Deliver every event of a media element as a subscription
///
/// The stream ends when the media element is dropped.
pub fn media_events(receiver: Arc<Mutex<Receiver<MediaEvent>>>) -> Subscription<MediaEvent> {
    let id = Arc::as_ptr(&receiver) as usize;
    subscription::from_recipe(MediaEventRecipe { id, receiver })
}
