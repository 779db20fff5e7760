//! Turns retrieved messages into the text blob the log parser reads.
//!
//! Each message becomes one block:
//!
//! ```text
//! author: YYYY-MM-DD HH:MM:SS
//! body
//!
//! ```
//!
//! with the timestamp shown in the configured UTC offset. Blocks are in
//! ascending creation order; messages with equal timestamps keep their
//! retrieval order.

use crate::api::ChannelMessage;
use chrono::FixedOffset;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render(messages: &[ChannelMessage], offset: FixedOffset) -> String {
    let mut ordered: Vec<&ChannelMessage> = messages.iter().collect();
    ordered.sort_by_key(|message| message.created_at);

    ordered
        .into_iter()
        .map(|message| {
            format!(
                "{}: {}\n{}\n\n",
                message.author_name,
                message.created_at.with_timezone(&offset).format(TIMESTAMP_FORMAT),
                message.content
            )
        })
        .collect()
}
