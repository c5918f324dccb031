use std::error::Error;
use log::{info, error, LevelFilter};
use clap::Parser;
use matcalc::{Matrix, Number, Op};
use matcalc::matrix::json;
use matcalc::utils::log::init_simple_logger;
use super::cli::{CliArgs, Cmd};

pub struct App {
    debug: bool
}

impl App {
    pub fn new() -> Self {
        App { debug: false }
    }

    pub fn run(&mut self) -> Result<String, i32> {
        let args = CliArgs::parse();

        if args.debug {
            self.debug = true;
            init_logger();
        }

        let (res, time) = measure(|| exec(&args.command));

        match res {
            Ok(m) => {
                info!("time: {:?}", time);
                Ok(render(&m, args.repr))
            },
            Err(e) => {
                if self.debug {
                    error!("{e}");
                } else {
                    eprintln!("{e}");
                }
                Err(1)
            }
        }
    }
}

fn init_logger() {
    if let Err(e) = init_simple_logger(LevelFilter::Trace) {
        eprintln!("cannot init logger: {e}");
    }
}

fn exec(cmd: &Cmd) -> Result<Matrix<Number>, Box<dyn Error>> {
    let (op, a, b) = match cmd {
        Cmd::Show { a }   => return load_operand(a),
        Cmd::Add { a, b } => (Op::Add, a, b),
        Cmd::Sub { a, b } => (Op::Sub, a, b),
        Cmd::Mul { a, b } => (Op::Mul, a, b),
    };

    let a = load_operand(a)?;
    let b = load_operand(b)?;
    info!("{op}: {:?}, {:?}", a.shape(), b.shape());

    let c = op.apply(&a, &b)?;
    Ok(c)
}

fn load_operand(arg: &str) -> Result<Matrix<Number>, Box<dyn Error>> {
    let text = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => arg.to_owned()
    };
    let m = json::matrix_from_str(&text)?;
    Ok(m)
}

fn render(m: &Matrix<Number>, repr: bool) -> String {
    if repr {
        format!("{m:?}")
    } else {
        m.to_string()
    }
}

fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}
