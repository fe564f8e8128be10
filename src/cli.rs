use thiserror::Error;

/// One of the four supported pixel operations, with its parameter when
/// the operation takes one.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Operation {
    RgbToGray,
    GrayToRgb,
    Brightness(f64),
    Contrast(f64),
}

/// Validated command line: input path plus the operation to run on it.
#[derive(Clone, PartialEq, Debug)]
pub struct Invocation {
    pub path: String,
    pub operation: Operation,
}

#[derive(Clone, PartialEq, Debug, Error)]
pub enum CliError {
    #[error("expected 2 or 3 arguments, got {0}")]
    InvalidArgumentCount(usize),
    #[error("unknown operation: {0}")]
    UnknownOperation(String),
    #[error("{operation} requires a numeric parameter, got {token:?}")]
    InvalidNumericParameter { operation: String, token: String },
}

pub fn print_usage(program: &str) {
    eprintln!("Pixel-level image transforms");
    eprintln!();
    eprintln!("Usage: {} <path_to_image> <operation> [parameter]", program);
    eprintln!();
    eprintln!("Operations:");
    eprintln!("  /RGB2GRAY            Convert an RGB image to grayscale (input must have 3 channels)");
    eprintln!("  /GRAY2RGB            Convert a grayscale image to RGB (input must have 1 channel)");
    eprintln!("  /BRIGHTNESS <beta>   Add <beta> to every channel of every pixel");
    eprintln!("  /CONTRAST <alpha>    Multiply every channel of every pixel by <alpha>");
    eprintln!();
    eprintln!("The result is previewed next to the original and written to output.png.");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} sample/color.png /RGB2GRAY", program);
    eprintln!("  {} sample/gray.png /GRAY2RGB", program);
    eprintln!("  {} sample/color.png /BRIGHTNESS 50", program);
    eprintln!("  {} sample/color.png /CONTRAST 1.5", program);
}

/// Parse the raw argument list (including the program name at index 0).
///
/// Token count must be 3 or 4: path plus operation, with exactly one extra
/// numeric token for the operations that take a parameter.
pub fn parse_args(args: &[String]) -> Result<Invocation, CliError> {
    if args.len() < 3 || args.len() > 4 {
        return Err(CliError::InvalidArgumentCount(args.len().saturating_sub(1)));
    }

    let path = args[1].clone();
    let token = args[2].as_str();
    let parameter = args.get(3);

    let operation = match token {
        "/RGB2GRAY" => {
            if parameter.is_some() {
                return Err(CliError::InvalidArgumentCount(args.len() - 1));
            }
            Operation::RgbToGray
        }
        "/GRAY2RGB" => {
            if parameter.is_some() {
                return Err(CliError::InvalidArgumentCount(args.len() - 1));
            }
            Operation::GrayToRgb
        }
        "/BRIGHTNESS" => Operation::Brightness(parse_parameter(token, parameter)?),
        "/CONTRAST" => Operation::Contrast(parse_parameter(token, parameter)?),
        _ => return Err(CliError::UnknownOperation(token.to_string())),
    };

    Ok(Invocation { path, operation })
}

fn parse_parameter(operation: &str, token: Option<&String>) -> Result<f64, CliError> {
    let token = token.ok_or_else(|| CliError::InvalidNumericParameter {
        operation: operation.to_string(),
        token: String::new(),
    })?;
    token
        .parse::<f64>()
        .map_err(|_| CliError::InvalidNumericParameter {
            operation: operation.to_string(),
            token: token.clone(),
        })
}
