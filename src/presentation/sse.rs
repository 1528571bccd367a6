// Server-sent state notifications
use crate::application::refresh_service::DashboardState;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use tokio::sync::watch;

/// Current state first, then one item per change until the sender goes away.
pub fn state_updates(mut rx: watch::Receiver<DashboardState>) -> impl Stream<Item = DashboardState> {
    async_stream::stream! {
        loop {
            let state = rx.borrow_and_update().clone();
            yield state;
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

pub fn sse_from_receiver(
    rx: watch::Receiver<DashboardState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let events = state_updates(rx).filter_map(|state| async move {
        match Event::default().event("state").json_data(&state) {
            Ok(event) => Some(Ok(event)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to encode state event");
                None
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
