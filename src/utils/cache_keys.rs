pub struct CacheKeys;

impl CacheKeys {
    pub const FEED_PREFIX: &'static str = "feed:";

    /// Cache key for one page of a feed; the key space is filter + page.
    pub fn feed_page(filter: &str, page: u32) -> String {
        format!("{}{}:page:{}", Self::FEED_PREFIX, filter, page)
    }
}
