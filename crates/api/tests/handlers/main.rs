mod test_utils;

mod availability_test;
mod booking_test;
mod middleware_test;
