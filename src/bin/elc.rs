//! elc: command-line access to the EmailListChecker API
//!
//! Usage:
//!   elc verify <email> [--timeout <secs>] [--no-smtp]
//!   elc batch <email>... [--name <name>] [--callback <url>] [--no-start]
//!   elc status <batch-id>
//!   elc results <batch-id> [--format json|csv|txt] [--filter <filter>]
//!   elc credits | usage | lists
//!
//! The API key is read from the keyring or `EMAILLISTCHECKER_API_KEY`.

use emaillistchecker::prelude::*;
use serde_json::Value;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "version" | "--version" | "-V" => {
            println!("elc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {}
    }

    let client = match EmailListChecker::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&client, &args[1], &args[2..]).await {
        report(&e);
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"elc: EmailListChecker command-line client

USAGE:
    elc <COMMAND> [OPTIONS]

COMMANDS:
    verify <email> [--timeout <secs>] [--no-smtp]       Verify one address
    batch <email>... [--name <n>] [--callback <url>] [--no-start]
                                                        Submit a batch
    status <batch-id>                                   Show batch progress
    results <batch-id> [--format <f>] [--filter <f>]    Download batch results
    find-email <first> <last> <domain>                  Find a person's address
    find-domain <domain> [--limit <n>] [--offset <n>]   Addresses for a domain
    find-company <company> [--limit <n>]                Addresses for a company
    credits                                             Show credit balance
    usage                                               Show usage statistics
    lists                                               List verification lists
    delete-list <list-id>                               Delete a verification list
    version                                             Show version information
    help                                                Show this help message

ENVIRONMENT:
    EMAILLISTCHECKER_API_KEY      API key (when not stored in the keyring)
    EMAILLISTCHECKER_BASE_URL     Override the API endpoint
    EMAILLISTCHECKER_TIMEOUT_MS   Request timeout in milliseconds
    RUST_LOG                      Log filter, e.g. emaillistchecker=debug"#
    );
}

async fn run(
    client: &EmailListChecker,
    command: &str,
    args: &[String],
) -> emaillistchecker::Result<()> {
    let (positional, flags) = split_args(args)?;

    match command {
        "verify" => {
            let email = required(&positional, 0, "email")?;
            let mut options = VerifyOptions::default().smtp_check(!has_flag(&flags, "--no-smtp"));
            if let Some(t) = flag_value(&flags, "--timeout") {
                options = options.timeout(parse_number(t, "--timeout")?);
            }
            print_json(&client.verify(email, &options).await?);
        }
        "batch" => {
            if positional.is_empty() {
                return Err(Error::generic("batch requires at least one email"));
            }
            let mut options = BatchOptions::default().auto_start(!has_flag(&flags, "--no-start"));
            if let Some(name) = flag_value(&flags, "--name") {
                options = options.name(name);
            }
            if let Some(url) = flag_value(&flags, "--callback") {
                options = options.callback_url(url);
            }
            print_json(&client.verify_batch(&positional[..], &options).await?);
        }
        "status" => {
            let id = required(&positional, 0, "batch-id")?;
            print_json(&client.get_batch_status(id).await?);
        }
        "results" => {
            let id = required(&positional, 0, "batch-id")?;
            let mut options = ResultsOptions::default();
            if let Some(f) = flag_value(&flags, "--format") {
                options = options.format(f.parse()?);
            }
            if let Some(f) = flag_value(&flags, "--filter") {
                options = options.filter(f.parse()?);
            }
            match client.get_batch_results(id, &options).await? {
                BatchResults::Json(v) => print_json(&v),
                BatchResults::Raw(text) => print!("{text}"),
            }
        }
        "find-email" => {
            let first = required(&positional, 0, "first name")?;
            let last = required(&positional, 1, "last name")?;
            let domain = required(&positional, 2, "domain")?;
            print_json(&client.find_email(first, last, domain).await?);
        }
        "find-domain" => {
            let domain = required(&positional, 0, "domain")?;
            let mut options = DomainSearchOptions::default();
            if let Some(n) = flag_value(&flags, "--limit") {
                options = options.limit(parse_number(n, "--limit")?);
            }
            if let Some(n) = flag_value(&flags, "--offset") {
                options = options.offset(parse_number(n, "--offset")?);
            }
            print_json(&client.find_by_domain(domain, &options).await?);
        }
        "find-company" => {
            let company = required(&positional, 0, "company")?;
            let mut options = CompanySearchOptions::default();
            if let Some(n) = flag_value(&flags, "--limit") {
                options = options.limit(parse_number(n, "--limit")?);
            }
            print_json(&client.find_by_company(company, &options).await?);
        }
        "credits" => print_json(&client.get_credits().await?),
        "usage" => print_json(&client.get_usage().await?),
        "lists" => print_json(&client.get_lists().await?),
        "delete-list" => {
            let id = required(&positional, 0, "list-id")?;
            print_json(&client.delete_list(id).await?);
        }
        other => {
            return Err(Error::generic(format!(
                "Unknown command: {other} (see `elc help`)"
            )));
        }
    }
    Ok(())
}

type Flags = Vec<(String, Option<String>)>;

/// Split arguments into positionals and `--flag [value]` pairs.
fn split_args(args: &[String]) -> emaillistchecker::Result<(Vec<String>, Flags)> {
    const VALUED: &[&str] = &[
        "--timeout", "--name", "--callback", "--format", "--filter", "--limit", "--offset",
    ];
    let mut positional = Vec::new();
    let mut flags = Vec::new();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if VALUED.contains(&arg.as_str()) {
            let value = iter
                .next()
                .ok_or_else(|| Error::generic(format!("{arg} expects a value")))?;
            flags.push((arg.clone(), Some(value.clone())));
        } else if arg.starts_with("--") {
            flags.push((arg.clone(), None));
        } else {
            positional.push(arg.clone());
        }
    }
    Ok((positional, flags))
}

fn has_flag(flags: &[(String, Option<String>)], name: &str) -> bool {
    flags.iter().any(|(k, _)| k == name)
}

fn flag_value<'a>(flags: &'a [(String, Option<String>)], name: &str) -> Option<&'a str> {
    flags
        .iter()
        .find(|(k, _)| k == name)
        .and_then(|(_, v)| v.as_deref())
}

fn required<'a>(
    positional: &'a [String],
    idx: usize,
    what: &str,
) -> emaillistchecker::Result<&'a str> {
    positional
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| Error::generic(format!("missing argument: <{what}>")))
}

fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> emaillistchecker::Result<T> {
    raw.parse()
        .map_err(|_| Error::generic(format!("{flag} expects a number, got '{raw}'")))
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}

fn report(e: &Error) {
    eprintln!("Error: {e}");
    if let Some(status) = e.status_code() {
        eprintln!("Status Code: {status}");
    }
    if let Some(wait) = e.retry_after() {
        eprintln!("Retry after: {}s", wait.as_secs());
    }
}
