pub mod scan_screen;
