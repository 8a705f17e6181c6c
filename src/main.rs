use unveil::app::App;
use unveil::input::load_file;
use unveil::ui::TuiManager;

const SAMPLE_TEXT: &str = "\
HI, THIS IS A NARRATIVE 🧍

MOVE THE SLIDER TO REVEAL IT

WORD BY WORD

SOME SPANS ARE ==green:HIGHLIGHTED==

SOME ARE **BOLD AND LOUD**

SOME POINT AT THE ==purple:UNIVERSE== 🪐

AND SOME JUST BURN 🔥";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (text, source) = match std::env::args().nth(1) {
        Some(path) => {
            let loaded = load_file(&path)?;
            (loaded.text, loaded.source)
        }
        None => (SAMPLE_TEXT.to_string(), "sample".to_string()),
    };

    let mut app = App::new(text, source);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
