mod block_string_tests;
mod graphql_parser_document_tests;
mod graphql_parser_error_tests;
mod graphql_parser_location_tests;
mod graphql_parser_type_tests;
mod utils;
