//! Purpose: Hold top-level CLI command dispatch for `tokenlens`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Command behavior, output envelopes, and exit code semantics stay unchanged.
//! Invariants: Helpers in `main.rs` remain the source of shared emission logic.

use super::*;

pub(super) fn dispatch_command(command: Command, color_mode: ColorMode) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "tokenlens", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Decode { token, file, json } => {
            let raw = read_token_input(token, file)?;
            let decoded = decode_with_context(&raw)?;
            if decoded.signature.is_empty() {
                emit_notice(&empty_signature_notice("decode"), color_mode);
            }
            if json {
                let envelope = serde_json::to_value(&decoded).map_err(|err| {
                    Error::new(ErrorKind::Internal)
                        .with_message("failed to encode decoded token")
                        .with_source(err)
                })?;
                emit_json(envelope);
            } else {
                let use_color = color_mode.use_color(io::stdout().is_terminal());
                print!("{}", render_token(&decoded, use_color));
            }
            Ok(RunOutcome::ok())
        }
        Command::Header { token, file, json } => {
            let raw = read_token_input(token, file)?;
            let decoded = decode_with_context(&raw)?;
            emit_part(&decoded.header, json, color_mode);
            Ok(RunOutcome::ok())
        }
        Command::Payload { token, file, json } => {
            let raw = read_token_input(token, file)?;
            let decoded = decode_with_context(&raw)?;
            emit_part(&decoded.payload, json, color_mode);
            Ok(RunOutcome::ok())
        }
        Command::Signature { token, file, json } => {
            let raw = read_token_input(token, file)?;
            let decoded = decode_with_context(&raw)?;
            if decoded.signature.is_empty() {
                emit_notice(&empty_signature_notice("signature"), color_mode);
            }
            if json {
                emit_json(Value::String(decoded.signature));
            } else {
                println!("{}", decoded.signature);
            }
            Ok(RunOutcome::ok())
        }
    }
}

fn emit_part(value: &Value, json: bool, color_mode: ColorMode) {
    if json {
        emit_json(value.clone());
    } else {
        let use_color = color_mode.use_color(io::stdout().is_terminal());
        println!("{}", render_value(value, use_color));
    }
}
