use std::io::Write;
use serde::Deserialize;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load board profile JSON.
    println!("cargo:rerun-if-changed=boards.json");
    let json_boards = std::fs::read_to_string("boards.json")?;
    // Parse it, so we don't have to parse it at runtime.
    let mut boards: Vec<BoardRecord> = serde_json::from_str(&json_boards)?;

    // Sorted by name so the lookup can binary search.
    boards.sort_by(|a, b| a.short_name.cmp(&b.short_name));

    let out_dir = std::env::var("OUT_DIR")?;
    let out_dir = std::path::Path::new(&out_dir);
    let out_path = out_dir.join("boards.rs");

    let mut out = std::fs::File::create(out_path)?;

    writeln!(out, "static PROFILES: &[BoardProfile] = &[")?;
    for b in boards {
        let d = &b.defaults;
        writeln!(out, "    BoardProfile {{")?;
        writeln!(out, "        short_name: {:?},", b.short_name)?;
        writeln!(out, "        description: {:?},", b.description)?;
        writeln!(out, "        defaults: BoardDefaults {{")?;
        writeln!(out, "            eeprom_rev: {:?},", d.eeprom_rev)?;
        writeln!(out, "            board_name: {:?},", d.board_name)?;
        writeln!(out, "            version: {:?},", d.version)?;
        writeln!(out, "            manufacturer: {:?},", d.manufacturer)?;
        writeln!(out, "            part_number: {:?},", d.part_number)?;
        writeln!(out, "            assembly_code: {:?},", d.assembly_code)?;
        writeln!(out, "            vdd_3v3b_ma: {},", d.vdd_3v3b_ma)?;
        writeln!(out, "            vdd_5v_ma: {},", d.vdd_5v_ma)?;
        writeln!(out, "            sys_5v_ma: {},", d.sys_5v_ma)?;
        writeln!(out, "            dc_supplied_ma: {},", d.dc_supplied_ma)?;
        writeln!(out, "        }},")?;
        writeln!(out, "        pins: &[")?;
        for p in &b.pins {
            let header = match p.header {
                8 => "Header::P8",
                9 => "Header::P9",
                h => {
                    return Err(format!(
                        "board {}: signal {} is on header {}, expected 8 or 9",
                        b.short_name, p.signal, h,
                    ).into());
                }
            };
            if p.mux_mode > 7 {
                return Err(format!(
                    "board {}: signal {} has mux mode {}, expected 0-7",
                    b.short_name, p.signal, p.mux_mode,
                ).into());
            }
            writeln!(out,
                "            PinAssignment {{ signal: {:?}, header: {}, pin: {}, \
                 config: PinConfig {{ mux_mode: {}, rx_enable: {}, pullup: {}, \
                 pull_disable: {}, slew_slow: {} }} }},",
                p.signal,
                header,
                p.pin,
                p.mux_mode,
                p.rx_enable,
                p.pullup,
                p.pull_disable,
                p.slew_slow)?;
        }
        writeln!(out, "        ],")?;
        writeln!(out, "    }},")?;
    }
    writeln!(out, "];")?;

    Ok(())
}

#[derive(Deserialize)]
struct BoardRecord {
    short_name: String,
    description: String,
    defaults: DefaultsRecord,
    pins: Vec<PinRecord>,
}

#[derive(Deserialize)]
struct DefaultsRecord {
    eeprom_rev: String,
    board_name: String,
    version: String,
    manufacturer: String,
    part_number: String,
    assembly_code: String,
    vdd_3v3b_ma: u32,
    vdd_5v_ma: u32,
    sys_5v_ma: u32,
    dc_supplied_ma: u32,
}

#[derive(Deserialize)]
struct PinRecord {
    signal: String,
    header: u8,
    pin: u8,
    #[serde(default = "default_mux_mode")]
    mux_mode: u8,
    #[serde(default)]
    rx_enable: bool,
    #[serde(default = "default_pullup")]
    pullup: bool,
    #[serde(default)]
    pull_disable: bool,
    #[serde(default)]
    slew_slow: bool,
}

// GPIO.
fn default_mux_mode() -> u8 {
    7
}

fn default_pullup() -> bool {
    true
}
