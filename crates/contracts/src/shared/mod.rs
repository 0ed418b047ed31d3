pub mod catalog_view;
