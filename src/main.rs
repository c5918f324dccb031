mod app;
use app::App;

fn main() {
    let mut app = App::new();
    let res = app.run();
    
    match res { 
        Ok(output) => println!("{output}"),
        Err(code)  => std::process::exit(code)
    }
}
