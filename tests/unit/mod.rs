mod filters;
mod stock_statistics;
