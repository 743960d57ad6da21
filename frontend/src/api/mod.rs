pub mod company_api;
