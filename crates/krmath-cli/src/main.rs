//! Evaluates a single `krmath` vector operation and prints the result.
//!
//! ```text
//! krmath-cli <op> <vector> [<vector>]
//! ```
//!
//! Vectors are written as comma-separated components, like `1,3,4`, and must have 2, 3 or 4
//! components. Both operands of a binary operation must have the same dimension.
//!
//! | Operation   | Operands | Result                                   |
//! |-------------|----------|------------------------------------------|
//! | `magnitude` | 1        | Euclidean length                         |
//! | `normalize` | 1        | unit vector                              |
//! | `dot`       | 2        | dot product                              |
//! | `angle`     | 2        | angle between both vectors, in radians   |
//! | `cross`     | 2        | cross product (2 or 3 dimensions only)   |
//! | `reflect`   | 2        | first vector reflected about the second  |
//! | `project`   | 2        | first vector projected onto the second   |
//! | `reject`    | 2        | first vector minus its projection        |
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter, see the `env_logger` documentation. `krmath-cli` and `krmath` log
//!   at *debug* level by default.
//! - `KRMATH_PRECISION`: number of fractional digits to print, from 0 to 17. Defaults to 4.

use std::{
    env::{self, VarError},
    fmt,
    str::FromStr,
};

use anyhow::{bail, Context};
use krmath::{Vec2d, Vec3d, Vector};
use log::LevelFilter;

const PRECISION_VAR: &str = "KRMATH_PRECISION";
const DEFAULT_PRECISION: usize = 4;
const MAX_PRECISION: usize = 17;

const USAGE: &str = "usage: krmath-cli <op> <vector> [<vector>]
ops: magnitude, normalize, dot, angle, cross, reflect, project, reject";

fn main() -> anyhow::Result<()> {
    init_logger();

    let precision = parse_precision(env::var(PRECISION_VAR))?;
    let args = env::args().skip(1).collect::<Vec<_>>();
    let output = run(&args)?;
    println!("{}", output.display(precision));
    Ok(())
}

/// Logs to *stderr*; this crate and `krmath` at *debug* level unless `RUST_LOG` says otherwise.
fn init_logger() {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .filter(Some("krmath"), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

fn parse_precision(var: Result<String, VarError>) -> anyhow::Result<usize> {
    let precision = match var {
        Ok(v) => v
            .trim()
            .parse::<usize>()
            .with_context(|| format!("invalid value set for `{PRECISION_VAR}` variable: '{v}'"))?,
        Err(VarError::NotPresent) => return Ok(DEFAULT_PRECISION),
        Err(VarError::NotUnicode(s)) => bail!(
            "invalid value set for `{PRECISION_VAR}` variable: {}",
            s.to_string_lossy()
        ),
    };
    if precision > MAX_PRECISION {
        bail!("`{PRECISION_VAR}` must be at most {MAX_PRECISION}, got {precision}");
    }
    Ok(precision)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Magnitude,
    Normalize,
    Dot,
    Angle,
    Cross,
    Reflect,
    Project,
    Reject,
}

impl Op {
    fn name(self) -> &'static str {
        match self {
            Op::Magnitude => "magnitude",
            Op::Normalize => "normalize",
            Op::Dot => "dot",
            Op::Angle => "angle",
            Op::Cross => "cross",
            Op::Reflect => "reflect",
            Op::Project => "project",
            Op::Reject => "reject",
        }
    }

    /// Number of vector operands.
    fn arity(self) -> usize {
        match self {
            Op::Magnitude | Op::Normalize => 1,
            _ => 2,
        }
    }
}

impl FromStr for Op {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Ok(match s {
            "magnitude" => Op::Magnitude,
            "normalize" => Op::Normalize,
            "dot" => Op::Dot,
            "angle" => Op::Angle,
            "cross" => Op::Cross,
            "reflect" => Op::Reflect,
            "project" => Op::Project,
            "reject" => Op::Reject,
            _ => bail!("unknown operation '{s}'\n{USAGE}"),
        })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, PartialEq)]
enum Output {
    Scalar(f64),
    Vector(Vec<f64>),
}

impl Output {
    fn vector<const N: usize>(v: Vector<f64, N>) -> Self {
        Output::Vector(v.into_array().to_vec())
    }

    fn display(&self, precision: usize) -> String {
        match self {
            Output::Scalar(s) => format!("{s:.precision$}"),
            Output::Vector(components) => {
                let components = components
                    .iter()
                    .map(|c| format!("{c:.precision$}"))
                    .collect::<Vec<_>>();
                format!("({})", components.join(", "))
            }
        }
    }
}

fn parse_vector(arg: &str) -> anyhow::Result<Vec<f64>> {
    arg.split(',')
        .map(|c| {
            let c = c.trim();
            c.parse::<f64>()
                .with_context(|| format!("invalid component '{c}' in vector '{arg}'"))
        })
        .collect()
}

fn run(args: &[String]) -> anyhow::Result<Output> {
    let Some((op, operands)) = args.split_first() else {
        bail!("{USAGE}");
    };
    let op = op.parse::<Op>()?;
    if operands.len() != op.arity() {
        bail!(
            "`{op}` takes {} vector(s), got {}\n{USAGE}",
            op.arity(),
            operands.len()
        );
    }
    let operands = operands
        .iter()
        .map(|arg| parse_vector(arg))
        .collect::<anyhow::Result<Vec<_>>>()?;
    log::debug!("{op} {operands:?}");

    let output = match operands[0].len() {
        2 => eval::<2>(op, &operands)?,
        3 => eval::<3>(op, &operands)?,
        4 => eval::<4>(op, &operands)?,
        n => bail!("vectors must have 2, 3 or 4 components, got {n}"),
    };
    log::debug!("{op} = {output:?}");
    Ok(output)
}

fn eval<const N: usize>(op: Op, operands: &[Vec<f64>]) -> anyhow::Result<Output> {
    let vectors = operands
        .iter()
        .enumerate()
        .map(|(i, components)| {
            Vector::<f64, N>::try_from(components.as_slice())
                .with_context(|| format!("operand {} of `{op}`", i + 1))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(match (op, &vectors[..]) {
        (Op::Magnitude, [a]) => Output::Scalar(a.magnitude()),
        (Op::Normalize, [a]) => Output::vector(a.try_normalized()?),
        (Op::Dot, [a, b]) => Output::Scalar(a.dot(*b)),
        (Op::Angle, [a, b]) => Output::Scalar(a.try_angle_between(*b)?),
        (Op::Cross, [a, b]) => cross(a.as_slice(), b.as_slice())?,
        (Op::Reflect, [a, b]) => Output::vector(a.reflect(*b)),
        (Op::Project, [a, b]) => Output::vector(a.try_project(*b)?),
        (Op::Reject, [a, b]) => Output::vector(a.try_reject(*b)?),
        _ => bail!("`{op}` takes {} vector(s), got {}", op.arity(), vectors.len()),
    })
}

fn cross(a: &[f64], b: &[f64]) -> anyhow::Result<Output> {
    Ok(match a.len() {
        2 => Output::Scalar(krmath::cross(Vec2d::try_from(a)?, Vec2d::try_from(b)?)),
        3 => Output::vector(krmath::cross(Vec3d::try_from(a)?, Vec3d::try_from(b)?)),
        n => bail!("the cross product needs 2 or 3 dimensions, got {n}"),
    })
}
