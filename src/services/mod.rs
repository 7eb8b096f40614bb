pub mod alert_service;
pub mod chart_service;
pub mod ping_service;
pub mod price_service;
pub mod series_service;
pub mod ticker_service;
pub mod widget_service;
