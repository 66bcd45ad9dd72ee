use rowscript::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Collects everything a terminal would show until the runtime
/// stops, exits, or waits for input.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Exit => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("?{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(&format!("{}\n", ps));
                break;
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Types each line of `program` into the shell.
pub fn enter_all(runtime: &mut Runtime, program: &str) {
    for line in program.lines() {
        runtime.enter(line);
    }
}
