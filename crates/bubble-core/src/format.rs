// File: crates/bubble-core/src/format.rs
// Summary: Number formatting for tick labels and tooltips (SI prefixes, fixed-point with grouping).

const PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Decimal exponent of `x` as scientific notation would print it.
pub fn exponent(x: f64) -> i32 {
    let s = format!("{:e}", x.abs());
    s.split_once('e').and_then(|(_, e)| e.parse().ok()).unwrap_or(0)
}

/// Significant digits (no decimal point) and exponent of `x` rounded to `digits`
/// places; `digits == 0` keeps the shortest exact representation.
fn decimal_parts(x: f64, digits: usize) -> (String, i32) {
    let s = if digits == 0 {
        format!("{:e}", x.abs())
    } else {
        format!("{:.*e}", digits - 1, x.abs())
    };
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.replace('.', ""), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn prefix_exponent(e: i32) -> i32 {
    (e.div_euclid(3)).clamp(-8, 8)
}

fn prefix_symbol(p: i32) -> &'static str {
    PREFIXES[(p + 8) as usize]
}

fn non_finite(x: f64) -> Option<String> {
    if x.is_nan() {
        Some("NaN".to_string())
    } else if x.is_infinite() {
        Some(if x > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() })
    } else {
        None
    }
}

/// Format with `precision` significant digits and an SI suffix picked from the
/// value itself: `format_si(1000.0, 4) == "1.000k"`, `format_si(50.0, 3) == "50.0"`.
pub fn format_si(x: f64, precision: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    let p = precision.clamp(1, 21);
    let (coeff, exp) = decimal_parts(x, p);
    let pe = prefix_exponent(exp);
    let i = exp - pe * 3 + 1;
    let n = coeff.len() as i32;
    let body = if i == n {
        coeff
    } else if i > n {
        format!("{coeff}{}", "0".repeat((i - n) as usize))
    } else if i > 0 {
        let (int, frac) = coeff.split_at(i as usize);
        format!("{int}.{frac}")
    } else {
        let (digits, _) = decimal_parts(x, (p as i32 + i - 1).max(0) as usize);
        format!("0.{}{}", "0".repeat((-i) as usize), digits)
    };
    let sign = if x < 0.0 && body.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    format!("{sign}{body}{}", prefix_symbol(pe))
}

/// Fixed-point with thousands separators: `format_fixed(12345.6, 1) == "12,345.6"`.
pub fn format_fixed(x: f64, precision: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    let s = format!("{:.*}", precision, x.abs());
    let (int, frac) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (s, None),
    };
    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (k, ch) in int.chars().enumerate() {
        if k > 0 && (int.len() - k) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let negative = x < 0.0 && has_nonzero_digit(&grouped, frac.as_deref());
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac {
        out.push('.');
        out.push_str(&f);
    }
    out
}

fn has_nonzero_digit(int: &str, frac: Option<&str>) -> bool {
    int.chars().chain(frac.unwrap_or("").chars()).any(|c| c.is_ascii_digit() && c != '0')
}

/// Tick label formatter sharing one SI prefix, chosen from the larger domain
/// magnitude, across all ticks: `0k 20k 40k`.
pub fn si_tick_formatter(start: f64, stop: f64, step: f64) -> impl Fn(f64) -> String {
    let value = start.abs().max(stop.abs());
    let pe = if value.is_finite() && value > 0.0 { prefix_exponent(exponent(value)) } else { 0 };
    let precision = if step.is_finite() && step != 0.0 {
        (pe * 3 - exponent(step)).max(0) as usize
    } else {
        0
    };
    let k = 10f64.powi(-pe * 3);
    let suffix = prefix_symbol(pe);
    move |v: f64| format!("{}{suffix}", format_fixed_plain(v * k, precision))
}

/// Tick label formatter for plain linear axes: grouping, precision from the step.
pub fn fixed_tick_formatter(step: f64) -> impl Fn(f64) -> String {
    let precision = if step.is_finite() && step != 0.0 { (-exponent(step)).max(0) as usize } else { 0 };
    move |v: f64| format_fixed(v, precision)
}

fn format_fixed_plain(x: f64, precision: usize) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    let s = format!("{:.*}", precision, x.abs());
    if x < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{s}")
    } else {
        s
    }
}
