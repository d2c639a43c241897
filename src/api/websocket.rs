// WebSocket support for the realtime deal feed
// Each connection gets its own task; it ends when the client goes away.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures_util::{Sink, SinkExt, Stream, StreamExt};

use crate::deals::{deal_at, wall_clock_seconds, DealMessage, STREAM_INTERVAL};

/// Why a deal stream stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// The client sent a Close frame or the connection dropped
    ClientClosed,
    /// Writing a frame failed, the socket is gone
    SendFailed,
}

/// Upgrade `GET /realtime/deals` to a WebSocket and stream deals on it
pub async fn handle_deals_websocket(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_deals_socket)
}

async fn handle_deals_socket(socket: WebSocket) {
    tracing::info!("Deal stream client connected");

    let (sender, receiver) = socket.split();
    let end = stream_deals(sender, receiver, wall_clock_seconds).await;

    tracing::info!(reason = ?end, "Deal stream client disconnected");
}

/// Push one deal every [`STREAM_INTERVAL`] until the client disconnects.
///
/// The inbound half is polled while waiting so a Close frame ends the stream
/// without waiting for the next send to fail. Anything else the client sends
/// is ignored.
pub async fn stream_deals<Tx, Rx, E, C>(mut sender: Tx, mut receiver: Rx, clock: C) -> StreamEnd
where
    Tx: Sink<Message> + Unpin,
    Rx: Stream<Item = Result<Message, E>> + Unpin,
    C: Fn() -> i64,
{
    loop {
        let frame = match DealMessage::Deal(deal_at(clock())).to_json() {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode deal");
                return StreamEnd::SendFailed;
            },
        };

        if sender.send(Message::Text(frame)).await.is_err() {
            tracing::debug!("Deal send failed, closing stream");
            return StreamEnd::SendFailed;
        }

        let pause = tokio::time::sleep(STREAM_INTERVAL);
        tokio::pin!(pause);

        loop {
            tokio::select! {
                _ = &mut pause => break,
                incoming = receiver.next() => match incoming {
                    None | Some(Err(_)) | Some(Ok(Message::Close(_))) => {
                        return StreamEnd::ClientClosed;
                    },
                    Some(Ok(_)) => {},
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;
    use std::convert::Infallible;
    use std::sync::{Arc, Mutex};

    type Sent = Arc<Mutex<Vec<Message>>>;

    fn recording_sink(sent: Sent) -> impl Sink<Message, Error = Infallible> + Unpin {
        Box::pin(futures_util::sink::unfold(sent, |sent, msg: Message| async move {
            sent.lock().unwrap().push(msg);
            Ok::<_, Infallible>(sent)
        }))
    }

    fn texts(sent: &Sent) -> Vec<serde_json::Value> {
        sent.lock()
            .unwrap()
            .iter()
            .map(|msg| match msg {
                Message::Text(text) => serde_json::from_str(text).unwrap(),
                other => panic!("unexpected frame: {:?}", other),
            })
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_frame_ends_stream_after_first_deal() {
        let sent: Sent = Arc::default();
        let receiver = stream::iter(vec![Ok::<_, Infallible>(Message::Close(None))]);

        let end = stream_deals(recording_sink(sent.clone()), receiver, || 0).await;

        assert_eq!(end, StreamEnd::ClientClosed);
        let frames = texts(&sent);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0]["type"], "deal");
        assert_eq!(frames[0]["payload"]["route"], "NYC → Paris");
        assert_eq!(frames[0]["payload"]["price"], 199);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_connection_counts_as_close() {
        let sent: Sent = Arc::default();
        let receiver = stream::empty::<Result<Message, Infallible>>();

        let end = stream_deals(recording_sink(sent.clone()), receiver, || 7).await;

        assert_eq!(end, StreamEnd::ClientClosed);
        assert_eq!(texts(&sent).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_deal_per_interval_following_the_clock() {
        let sent: Sent = Arc::default();
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel::<Result<Message, Infallible>>();
        let receiver = Box::pin(stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|item| (item, rx))
        }));

        let start = tokio::time::Instant::now();
        let clock = move || 1_700_000_000 + start.elapsed().as_secs() as i64;

        let task = tokio::spawn({
            let sent = sent.clone();
            async move { stream_deals(recording_sink(sent), receiver, clock).await }
        });

        // Client chatter must not cut the pause short
        tx.send(Ok(Message::Text("hello".to_string()))).unwrap();
        tokio::time::sleep(STREAM_INTERVAL * 2 + STREAM_INTERVAL / 2).await;
        tx.send(Ok(Message::Close(None))).unwrap();

        assert_eq!(task.await.unwrap(), StreamEnd::ClientClosed);

        let frames = texts(&sent);
        assert_eq!(frames.len(), 3);
        for (i, frame) in frames.iter().enumerate() {
            let t = 1_700_000_000 + 2 * i as i64;
            let expected = serde_json::to_value(DealMessage::Deal(deal_at(t))).unwrap();
            assert_eq!(frame, &expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_failure_ends_stream() {
        let sink = futures_util::sink::drain().sink_map_err(|_: Infallible| ());
        let failing = Box::pin(sink.with(|_: Message| async { Err::<Message, ()>(()) }));
        let receiver = stream::pending::<Result<Message, Infallible>>();

        let end = stream_deals(failing, receiver, || 0).await;
        assert_eq!(end, StreamEnd::SendFailed);
    }
}
