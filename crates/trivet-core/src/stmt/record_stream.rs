use super::Record;

use std::{
    collections::VecDeque,
    fmt,
    pin::Pin,
    task::{Context, Poll},
};
use tokio_stream::{Stream, StreamExt};

type DynStream = Pin<Box<dyn Stream<Item = crate::Result<Record>> + Send + 'static>>;

/// A stream of records returned from storage.
///
/// Rows already materialized sit in the buffer; the optional tail stream is
/// polled once the buffer drains. The caller either collects everything or
/// consumes rows incrementally.
#[derive(Default)]
pub struct RecordStream {
    buffer: VecDeque<Record>,
    stream: Option<DynStream>,
}

struct Iter<I> {
    iter: I,
}

impl RecordStream {
    pub fn from_vec(records: Vec<Record>) -> Self {
        Self {
            buffer: records.into(),
            stream: None,
        }
    }

    pub fn from_stream<T>(stream: T) -> Self
    where
        T: Stream<Item = crate::Result<Record>> + Send + 'static,
    {
        Self {
            buffer: VecDeque::new(),
            stream: Some(Box::pin(stream)),
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iter: I) -> Self
    where
        I: Iterator<Item = crate::Result<Record>> + Send + 'static,
    {
        Self::from_stream(Iter { iter })
    }

    /// Returns the next record in the stream
    pub async fn next(&mut self) -> Option<crate::Result<Record>> {
        StreamExt::next(self).await
    }

    /// The stream will contain at least this number of records
    pub fn min_len(&self) -> usize {
        let (ret, _) = self.size_hint();
        ret
    }

    pub async fn collect(mut self) -> crate::Result<Vec<Record>> {
        let mut ret = Vec::with_capacity(self.min_len());

        while let Some(res) = self.next().await {
            ret.push(res?);
        }

        Ok(ret)
    }
}

impl Stream for RecordStream {
    type Item = crate::Result<Record>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(next) = self.buffer.pop_front() {
            Poll::Ready(Some(Ok(next)))
        } else if let Some(stream) = self.stream.as_mut() {
            Pin::new(stream).poll_next(cx)
        } else {
            Poll::Ready(None)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = match &self.stream {
            Some(stream) => stream.size_hint(),
            None => (0, Some(0)),
        };

        let buffered = self.buffer.len();

        low += buffered;

        if let Some(high) = high.as_mut() {
            *high += buffered;
        }

        (low, high)
    }
}

impl From<Vec<Record>> for RecordStream {
    fn from(value: Vec<Record>) -> Self {
        Self::from_vec(value)
    }
}

impl<I> Unpin for Iter<I> {}

impl<I> Stream for Iter<I>
where
    I: Iterator<Item = crate::Result<Record>>,
{
    type Item = crate::Result<Record>;

    fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.iter.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl fmt::Debug for RecordStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStream")
            .field("buffered", &self.buffer.len())
            .finish()
    }
}
