pub mod directory_fetcher;
