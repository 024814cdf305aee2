mod import_to_view;
mod memoization;
mod scenarios;
