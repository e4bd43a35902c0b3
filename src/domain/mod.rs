//! Domain layer: market data, the acquisition lifecycle, theme state, logging and errors.
//!
//! Nothing in here touches the browser; infrastructure plugs in through
//! [`market_data::MarketDataSource`], [`theme::PresentationFlag`] and the
//! logger/clock traits in [`logging`].

pub mod errors;
pub mod lifecycle;
pub mod logging;
pub mod market_data;
pub mod theme;
