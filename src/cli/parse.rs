use super::CliFlags;
use crate::error::{Error, Result};

pub fn parse(args: &[String]) -> Result<CliFlags> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            flag @ ("-l" | "--length") => {
                flags.length = Some(value(args, &mut i, flag)?.to_string());
            }
            flag @ ("-n" | "--number") => {
                let raw = value(args, &mut i, flag)?;
                flags.number = match raw.parse::<usize>() {
                    Ok(0) | Err(_) => return Err(Error::InvalidNumber(raw.to_string())),
                    Ok(n) => Some(n),
                };
            }
            arg => return Err(Error::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| Error::MissingValue(flag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("cyclepass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_args_give_defaults() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn reads_values_and_toggles() {
        let flags = parse(&args(&["-l", "12", "--number", "3", "--no-symbols", "-u", "-q"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("12"));
        assert_eq!(flags.number, Some(3));
        assert!(flags.no_symbols);
        assert!(flags.urandom);
        assert!(flags.quiet);
        assert!(!flags.no_lower);
    }

    #[test]
    fn length_is_kept_raw() {
        let flags = parse(&args(&["--length", "2.5"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("2.5"));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            parse(&args(&["--bogus"])).unwrap_err(),
            Error::UnknownArg("--bogus".into())
        );
        assert_eq!(
            parse(&args(&["-n", "many"])).unwrap_err(),
            Error::InvalidNumber("many".into())
        );
        assert_eq!(
            parse(&args(&["-n", "0"])).unwrap_err(),
            Error::InvalidNumber("0".into())
        );
        assert_eq!(
            parse(&args(&["-l"])).unwrap_err(),
            Error::MissingValue("-l".into())
        );
    }
}
