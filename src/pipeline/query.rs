use serde_json::{Map, Value};

/// One step of a decomposed query key: a named slot or an array append (`[]`).
enum Seg {
    Key(String),
    Append,
}

/// Parse a raw query string into a nested JSON object.
///
/// Pairs are percent-decoded, then each key is folded into the object using
/// bracket (`a[b]=1`) and dot (`a.b=1`) nesting; an empty bracket (`a[]=1`)
/// appends to an array. Duplicate scalar keys are last-write-wins.
///
/// Best-effort and total: malformed keys degrade to their literal pieces and
/// the function never fails.
#[must_use]
pub fn parse_query(raw: &str) -> Value {
    let mut root = Value::Object(Map::new());
    if raw.is_empty() {
        return root;
    }
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        let mut segs = split_key(&key);
        // A leading append (`[]=x`) has no slot to attach to; keep the result
        // an object by demoting it to an empty key.
        if matches!(segs.first(), Some(Seg::Append)) {
            segs[0] = Seg::Key(String::new());
        }
        insert_value(&mut root, &segs, value.to_string());
    }
    root
}

fn split_key(key: &str) -> Vec<Seg> {
    let mut segs = Vec::new();
    let head_end = key.find(['[', '.']).unwrap_or(key.len());
    let head = &key[..head_end];
    if !head.is_empty() {
        segs.push(Seg::Key(head.to_string()));
    }
    let mut rest = &key[head_end..];
    while !rest.is_empty() {
        if let Some(r) = rest.strip_prefix('.') {
            let end = r.find(['[', '.']).unwrap_or(r.len());
            if end > 0 {
                segs.push(Seg::Key(r[..end].to_string()));
            }
            rest = &r[end..];
        } else if let Some(r) = rest.strip_prefix('[') {
            match r.find(']') {
                Some(close) => {
                    if close == 0 {
                        segs.push(Seg::Append);
                    } else {
                        segs.push(Seg::Key(r[..close].to_string()));
                    }
                    rest = &r[close + 1..];
                }
                None => {
                    // Unterminated bracket: take the remainder literally.
                    if !r.is_empty() {
                        segs.push(Seg::Key(r.to_string()));
                    }
                    rest = "";
                }
            }
        } else {
            let end = rest.find(['[', '.']).unwrap_or(rest.len());
            segs.push(Seg::Key(rest[..end].to_string()));
            rest = &rest[end..];
        }
    }
    if segs.is_empty() {
        segs.push(Seg::Key(key.to_string()));
    }
    segs
}

fn insert_value(slot: &mut Value, segs: &[Seg], value: String) {
    match segs.split_first() {
        None => *slot = Value::String(value),
        Some((Seg::Append, rest)) => {
            if !matches!(slot, Value::Array(_)) {
                *slot = Value::Array(Vec::new());
            }
            if let Value::Array(arr) = slot {
                if rest.is_empty() {
                    arr.push(Value::String(value));
                } else {
                    arr.push(Value::Null);
                    let last = arr.len() - 1;
                    insert_value(&mut arr[last], rest, value);
                }
            }
        }
        Some((Seg::Key(k), rest)) => {
            if !matches!(slot, Value::Object(_)) {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(map) = slot {
                let entry = map.entry(k.clone()).or_insert(Value::Null);
                insert_value(entry, rest, value);
            }
        }
    }
}
