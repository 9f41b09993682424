mod page_fetcher;

pub use page_fetcher::HttpPageFetcher;
