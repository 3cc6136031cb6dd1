use std::path::Path;
use std::process;

use jazh_core::{Detection, ScriptMatcherSet};

use crate::unihan::DataLayout;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

fn chars_to_string(chars: &[char]) -> String {
    chars.iter().collect()
}

/// One line per text: verdict, per-script characters, then the text itself.
fn summary_line(detection: &Detection) -> String {
    let result = &detection.result;
    format!(
        "{}\tja={:?}\tzh={:?}\tother={}\t{}",
        result.lang,
        chars_to_string(&result.japanese_chars),
        chars_to_string(&result.chinese_chars),
        result.other_chars.len(),
        result.text
    )
}

pub fn detect(data_dir: &Path, texts: &[String], json: bool) {
    let result_dir = DataLayout::new(data_dir).result_dir();
    let set = die!(
        ScriptMatcherSet::load(&result_dir),
        "Error loading matchers (run `unihantool setup` first): {}"
    );

    for text in texts {
        let detection = Detection::new(&set, text);
        if json {
            let line = die!(serde_json::to_string(&detection), "Error encoding JSON: {}");
            println!("{line}");
        } else {
            println!("{}", summary_line(&detection));
        }
    }
}
