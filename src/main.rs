mod args;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use args::{parse_members, Args};
use clap::Parser;
use intset::{equal, DefaultIntSet};
use log::info;

fn print_set(out: &mut impl Write, label: &str, set: &DefaultIntSet) -> Result<()> {
    write!(out, "{label}: {{")?;
    set.dump(out)?;
    writeln!(out, "}}")?;
    Ok(())
}

fn build_set(list: &str, label: &str) -> Result<DefaultIntSet> {
    let members = parse_members(list).with_context(|| format!("parsing set {label}"))?;
    DefaultIntSet::try_from(members.as_slice()).with_context(|| format!("building set {label}"))
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let a = build_set(&args.a, "A")?;
    let b = build_set(&args.b, "B")?;
    info!("A has {} members, B has {} members", a.size(), b.size());

    print_set(out, "A", &a)?;
    print_set(out, "B", &b)?;

    let union = a.union_with(&b).context("computing A + B")?;
    print_set(out, "A + B", &union)?;
    print_set(out, "A * B", &a.intersect(&b))?;
    print_set(out, "A - B", &a.subtract(&b))?;
    print_set(out, "B - A", &b.subtract(&a))?;

    writeln!(out, "A <= B: {}", a.is_subset_of(&b))?;
    writeln!(out, "B <= A: {}", b.is_subset_of(&a))?;
    writeln!(out, "A == B: {}", equal(&a, &b))?;
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&args, &mut out) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(argv: &[&str]) -> Result<String> {
        let args = Args::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(&args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_algebra_with_negatives() {
        let output = run_with(&["intset", "--a", "-1,2,3", "--b", "3,-1,4"]).unwrap();
        assert_eq!(
            output,
            "A: {-1  2  3}\n\
             B: {3  -1  4}\n\
             A + B: {-1  2  3  4}\n\
             A * B: {-1  3}\n\
             A - B: {2}\n\
             B - A: {4}\n\
             A <= B: false\n\
             B <= A: false\n\
             A == B: false\n"
        );
    }

    #[test]
    fn empty_sets() {
        let output = run_with(&["intset"]).unwrap();
        assert!(output.starts_with("A: {}\nB: {}\n"));
        assert!(output.ends_with("A == B: true\n"));
    }

    #[test]
    fn too_many_members_is_an_error() {
        let err = run_with(&["intset", "--a", "1,2,3,4,5,6,7,8,9,10,11"]).unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "building set A: set capacity of 10 exceeded"
        );
    }

    #[test]
    fn union_overflow_is_an_error() {
        let err = run_with(&["intset", "--a", "1,2,3,4,5,6", "--b", "-1,-2,-3,-4,-5"]).unwrap_err();
        assert_eq!(format!("{:#}", err), "computing A + B: set capacity of 10 exceeded");
    }

    #[test]
    fn bad_member_is_an_error() {
        assert!(run_with(&["intset", "--b", "1,two"]).is_err());
    }
}
