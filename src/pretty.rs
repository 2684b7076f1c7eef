use crate::ui::splash::LOGO_NAME;

macro_rules! print_cmd_error {
    ($tt:tt) => {
        eprintln!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
    };
    ($tt:tt, $($tts:tt)+) => {
        eprintln!("\x1b[1;31m[ERROR!!!] {}\x1b[0m", $tt);
        eprintln!("{}", core::format_args!($($tts)*));
    }
}

macro_rules! print_cmd_info {
    ($tt:tt, $($tts:tt)*) => {
        println!("\x1b[1;33m[INFO!!!] {}\x1b[0m", $tt);
        println!("{}", core::format_args!($($tts)*));
    }
}

pub(crate) fn print_unreachable_header(api_url: &str) {
    // RGB: FF = 255, AA = 170, 00 = 0
    println!("\x1b[38;2;255;170;0m{}\x1b[0m", LOGO_NAME);
    println!("\x1b[38;2;255;170;0mAPI injoignable.\x1b[0m");
    println!(
        "No panel could be loaded from {}. Check that the macro API is running, or pass --api-url.\n",
        api_url
    );
}

pub(crate) use print_cmd_error;
pub(crate) use print_cmd_info;
