mod download_tests;
mod listing_page_tests;
mod mutation_tests;
