use std::io::Write;

use crate::{
    config::DemoConfig,
    option::{get_some, MyOption},
    result::{get_result, MyError, MyResult},
};

pub fn describe_option(value: &MyOption<i32>) -> String {
    match value {
        MyOption::Some(r) => {
            tracing::info!(value = r, "matched Some");
            format!("Some: {r}")
        }
        MyOption::None => {
            tracing::info!("matched None");
            "None".to_string()
        }
    }
}

pub fn describe_result(value: &MyResult<i32, MyError>) -> String {
    match value {
        MyResult::Ok(a) => {
            tracing::info!(value = a, "matched Ok");
            format!("Ok: {a}")
        }
        MyResult::Error(error) => {
            tracing::info!(%error, "matched Error");
            format!("Error: {error}")
        }
    }
}

/// Builds one optional and one result from the configured inputs and writes a line for each.
#[tracing::instrument(skip(out))]
pub fn run(config: &DemoConfig, out: &mut impl Write) -> std::io::Result<()> {
    let some_result = get_some(config.some_input);
    writeln!(out, "{}", describe_option(&some_result))?;

    let result = get_result(config.result_input);
    writeln!(out, "{}", describe_result(&result))?;

    Ok(())
}
