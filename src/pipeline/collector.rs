use std::future::Future;

use crate::{Res, types::Page};

/// Drains a paginated resource into one ordered `Vec`.
///
/// `fetch_page` yields the first page. `fetch_next` receives the previous page
/// (items already taken, cursor intact) and yields the one after it. The loop
/// stops on the first page without a `next` cursor.
///
/// # Errors
///
/// The first failing fetch aborts the whole collection. Items gathered so far
/// are dropped so a caller never mistakes a truncated list for a complete one.
///
/// # Example
///
/// ```ignore
/// let items = collect(
///     api.playlist_items("37i9dQZF1DXcBWIGoYBM5M", 100),
///     async |previous| api.next_page(previous).await,
/// )
/// .await?;
/// ```
pub async fn collect<T, F, N>(fetch_page: F, mut fetch_next: N) -> Res<Vec<T>>
where
    F: Future<Output = Res<Page<T>>>,
    N: AsyncFnMut(&Page<T>) -> Res<Page<T>>,
{
    let mut page = fetch_page.await?;
    let mut items = std::mem::take(&mut page.items);

    while page.has_next() {
        page = fetch_next(&page).await?;
        items.append(&mut page.items);
    }

    Ok(items)
}
