//! Option declarations given on the command line: `long[,c]:kind[=default]`.

use argscan_parser::Descriptor;

pub(crate) fn parse_declaration(text: &str) -> Result<Descriptor, String> {
    let Some((names, kind)) = text.split_once(':') else {
        return Err(format!(
            "Invalid declaration '{text}': expected long[,c]:kind[=default]"
        ));
    };
    let (kind, default) = match kind.split_once('=') {
        Some((kind, default)) => (kind, Some(default)),
        None => (kind, None),
    };
    let (long, short) = match names.split_once(',') {
        Some((long, short)) => {
            let mut chars = short.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => (long, Some(c)),
                _ => {
                    return Err(format!(
                        "Invalid declaration '{text}': short name must be a single character"
                    ));
                }
            }
        }
        None => (names, None),
    };

    let no_default = |d: Descriptor| match default {
        Some(_) => Err(format!(
            "Invalid declaration '{text}': {kind} options take no default"
        )),
        None => Ok(d),
    };
    let int_default = |fallback: i64| match default {
        Some(v) => v
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("Invalid declaration '{text}': '{v}' is not an integer")),
        None => Ok(fallback),
    };

    let descriptor = match kind {
        "flag" => no_default(Descriptor::flag(long))?.with_description("  --{name}"),
        "int" => Descriptor::int(long, int_default(0)?)
            .with_description("  --{name} <int>  [{value}]"),
        "float" => {
            let value = match default {
                Some(v) => v.trim().parse::<f64>().map_err(|_| {
                    format!("Invalid declaration '{text}': '{v}' is not a number")
                })?,
                None => 0.0,
            };
            Descriptor::float(long, value).with_description("  --{name} <float>  [{value}]")
        }
        "string" => match default {
            Some(v) => Descriptor::string_with_default(long, v),
            None => Descriptor::string(long),
        }
        .with_description("  --{name} <string>  [{value}]"),
        "ints" => no_default(Descriptor::ints(long))?
            .with_description("  --{name} <n> <int>...  [{value}]"),
        "strings" => no_default(Descriptor::strings(long))?
            .with_description("  --{name} <n> <string>...  [{value}]"),
        "range" => Descriptor::range(long, int_default(0)?)
            .with_description("  --{name} <start[:step]:end>  [{value}]"),
        other => {
            return Err(format!(
                "Invalid declaration '{text}': unknown kind '{other}'"
            ));
        }
    };

    Ok(match short {
        Some(c) => descriptor.with_short(c),
        None => descriptor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argscan_parser::OptionValue;

    #[test]
    fn parses_each_kind() {
        let cases = [
            ("verbose,v:flag", "flag"),
            ("count:int", "int"),
            ("scale:float=0.5", "float"),
            ("out,o:string=a.txt", "string"),
            ("ids:ints", "ints"),
            ("tags:strings", "strings"),
            ("frames,f:range=3", "range"),
        ];
        for (text, kind) in cases {
            let d = parse_declaration(text).unwrap();
            assert_eq!(d.value().kind_name(), kind, "{text}");
            assert!(!d.is_set());
        }
    }

    #[test]
    fn defaults_and_short_names() {
        let d = parse_declaration("count,c:int=-4").unwrap();
        assert_eq!(d.name(), "count");
        assert_eq!(d.short(), Some('c'));
        assert_eq!(d.as_int(), Some(-4));

        let d = parse_declaration("out:string=a=b").unwrap();
        assert_eq!(d.as_str(), Some("a=b"));

        let d = parse_declaration("frames:range=7").unwrap();
        assert_eq!(d.current_value_text(), "7:1:7");

        let d = parse_declaration("scale:float").unwrap();
        assert_eq!(d.value(), &OptionValue::Float(0.0));
    }

    #[test]
    fn rejects_malformed_declarations() {
        let errors = [
            ("count", "expected long[,c]:kind[=default]"),
            ("count,cc:int", "short name must be a single character"),
            ("count,:int", "short name must be a single character"),
            ("count:number", "unknown kind 'number'"),
            ("v:flag=1", "flag options take no default"),
            ("ids:ints=3", "ints options take no default"),
            ("count:int=many", "'many' is not an integer"),
            ("scale:float=x", "'x' is not a number"),
        ];
        for (text, expected) in errors {
            let err = parse_declaration(text).unwrap_err();
            assert!(err.contains(expected), "{text}: {err}");
        }
    }

    #[test]
    fn descriptions_show_current_value() {
        let d = parse_declaration("count,c:int=9").unwrap();
        assert_eq!(d.render_description(), "  --count <int>  [9]");
    }
}
