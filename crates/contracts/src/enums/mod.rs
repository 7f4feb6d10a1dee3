pub mod division;
