pub mod haversine;
