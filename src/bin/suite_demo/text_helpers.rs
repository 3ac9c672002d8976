// Code exercised by the demo suite

use std::num::ParseIntError;

pub fn parse_int(text: &str) -> Result<i64, ParseIntError> {
    text.trim().parse()
}

pub fn add(a: i64, b: i64) -> i64 {
    a + b
}

pub fn first_word(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
