pub mod report_printer;
