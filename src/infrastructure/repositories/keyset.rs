//! Pull-based streams over keyset pagination
//!
//! Each pull runs `fetch_after(last_key)` and yields one element, so nothing is
//! buffered and no connection is held between pulls.

use std::future::Future;

use futures::stream::{self, BoxStream, StreamExt};

use crate::domain::DomainError;

/// Build a stream from a "next row after this key" query.
///
/// `fetch_after` receives `None` for the first element and the key of the
/// previous element afterwards; returning `Ok(None)` ends the stream. The
/// stream also ends after the first error.
pub(crate) fn keyset_stream<'a, K, T, F, Fut>(
    mut fetch_after: F,
) -> BoxStream<'a, Result<T, DomainError>>
where
    K: Send + 'a,
    T: Send + 'a,
    F: FnMut(Option<K>) -> Fut + Send + 'a,
    Fut: Future<Output = Result<Option<(K, T)>, DomainError>> + Send + 'a,
{
    stream::try_unfold(None, move |cursor| {
        let next = fetch_after(cursor);
        async move {
            let found = next.await?;
            Ok::<_, DomainError>(found.map(|(key, item)| (item, Some(key))))
        }
    })
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::TryStreamExt;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_pulls_one_fetch_per_element() {
        let rows = vec![1, 2, 3];
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut items = keyset_stream(move |after: Option<i32>| {
            counter.fetch_add(1, Ordering::SeqCst);
            let next = rows
                .iter()
                .copied()
                .find(|r| after.is_none_or(|a| *r > a));
            async move { Ok::<_, DomainError>(next.map(|r| (r, r * 10))) }
        });

        assert_eq!(items.try_next().await.unwrap(), Some(10));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        let rest: Vec<i32> = items.try_collect().await.unwrap();
        assert_eq!(rest, vec![20, 30]);
        // one extra fetch to observe the end
        assert_eq!(calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_stream_ends_after_error() {
        let mut items = keyset_stream(|after: Option<i32>| async move {
            match after {
                None => Ok(Some((1, "first"))),
                Some(_) => Err(DomainError::Database("cursor lost".to_string())),
            }
        });

        assert_eq!(items.try_next().await.unwrap(), Some("first"));
        assert!(items.try_next().await.is_err());
        assert!(items.next().await.is_none());
    }
}
