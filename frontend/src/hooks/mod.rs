pub mod use_debounce;
