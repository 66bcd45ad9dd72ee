use crate::lang::lex_line;
use crate::mach::{Context, Halt, Kind, Listing, Step, Val};

mod dispatch_test;

fn args(s: &str) -> Vec<String> {
    lex_line(s)
}

/// Dispatches a whole command line and returns the value and leftovers.
fn dispatch(context: &mut Context, s: &str) -> Result<(Val, Vec<String>), Halt> {
    let tokens = args(s);
    let (val, remaining) = context.dispatch(&tokens[0], &tokens[1..])?;
    Ok((val, remaining.to_vec()))
}

fn listing(source: &str) -> Listing {
    let mut listing = Listing::default();
    listing.load_str(source).unwrap();
    listing
}

/// Steps until the program ends, with a cap for runaway jumps.
fn run(context: &mut Context, listing: &Listing) -> Result<String, Halt> {
    let mut out = String::new();
    for _ in 0..1000 {
        let step = context.step(listing);
        if let Some(s) = context.take_output() {
            out.push_str(&s);
        }
        if step? == Step::End {
            return Ok(out);
        }
    }
    out.push_str("\nCYCLES EXCEEDED\n");
    Ok(out)
}

fn reserved(kind: Kind, name: &str) -> Context {
    let mut context = Context::new();
    context.vars.reserve(name, kind);
    context
}
