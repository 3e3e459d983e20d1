//! RemoteCalc client entry point.
//!
//! Connects to the server, performs the heartbeat exchange and one
//! calculation, and reports the result. The operation can be given on the
//! command line or entered interactively.

use std::io::Write;
use std::net::SocketAddr;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calc_client::calculate;

/// RemoteCalc client: performs one remote calculation per run.
#[derive(Debug, Parser)]
#[command(name = "calc-client", version, about)]
struct Args {
    /// Server host name or address.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server TCP port.
    #[arg(long, default_value_t = 6000)]
    port: u16,

    /// Operation code: 1 add, 2 subtract, 3 multiply, 4 divide.
    op_code: Option<u8>,

    /// First operand.
    operand1: Option<i32>,

    /// Second operand.
    operand2: Option<i32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let (op_code, operand1, operand2) = match (args.op_code, args.operand1, args.operand2) {
        (Some(op), Some(a), Some(b)) => (op, a, b),
        // Stdin is blocking; keep the prompt loop off the async runtime.
        _ => tokio::task::spawn_blocking(prompt_operation)
            .await
            .context("prompt task failed")??,
    };

    let addr: SocketAddr = tokio::net::lookup_host((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("resolving {}:{}", args.host, args.port))?
        .next()
        .with_context(|| format!("no address found for {}", args.host))?;

    let result = calculate(addr, op_code, operand1, operand2).await?;
    info!("operation result: {result}");
    Ok(())
}

/// Prompts for the operation code and both operands on stdin.
fn prompt_operation() -> anyhow::Result<(u8, i32, i32)> {
    let op_code = prompt_parse("Enter operation code (1: add, 2: subtract, 3: multiply, 4: divide): ")?;
    let operand1 = prompt_parse("Enter first integer: ")?;
    let operand2 = prompt_parse("Enter second integer: ")?;
    Ok((op_code, operand1, operand2))
}

/// Prints `label`, reads one line, and parses it, retrying until the input
/// parses or stdin closes.
fn prompt_parse<T: FromStr>(label: &str) -> anyhow::Result<T> {
    loop {
        print!("{label}");
        std::io::stdout().flush().context("flushing prompt")?;

        let mut line = String::new();
        let read = std::io::stdin()
            .read_line(&mut line)
            .context("reading stdin")?;
        if read == 0 {
            anyhow::bail!("stdin closed before a value was entered");
        }

        match line.trim().parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => eprintln!("not a valid number, try again"),
        }
    }
}
