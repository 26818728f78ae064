use super::*;
use std::io;
use std::sync::{Arc, Mutex};

/// Log sink shared between a test and its scoped subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn resolve_with_captured_logs(requested: &str) -> (&'static ModelEntry, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let entry = tracing::subscriber::with_default(subscriber, || resolve(requested));
    (entry, logs.contents())
}

#[test]
fn test_catalog_contains_all_models() {
    let registry = ModelRegistry::builtin();
    assert!(registry.contains("parakeet-tdt-0.6b-v3"));
    assert!(registry.contains("istupakov/parakeet-tdt-0.6b-v3-onnx"));
    assert!(registry.contains("grikdotnet/parakeet-tdt-0.6b-fp16"));
    assert_eq!(registry.entries().count(), 3);
}

#[test]
fn test_lookup_int8_default_model() {
    let entry = lookup("parakeet-tdt-0.6b-v3").unwrap();
    assert_eq!(entry.name, "parakeet-tdt-0.6b-v3");
    assert_eq!(entry.backing_id, "nemo-parakeet-tdt-0.6b-v3");
    assert_eq!(entry.quantization, Some(Quantization::Int8));
    assert_eq!(entry.description, "INT8 (fastest)");
}

#[test]
fn test_lookup_fp32_model() {
    let entry = lookup("istupakov/parakeet-tdt-0.6b-v3-onnx").unwrap();
    assert_eq!(entry.name, "istupakov/parakeet-tdt-0.6b-v3-onnx");
    assert_eq!(entry.backing_id, "istupakov/parakeet-tdt-0.6b-v3-onnx");
    assert_eq!(entry.quantization, None);
    assert_eq!(entry.description, "FP32");
}

#[test]
fn test_lookup_fp16_model() {
    let entry = lookup("grikdotnet/parakeet-tdt-0.6b-fp16").unwrap();
    assert_eq!(entry.name, "grikdotnet/parakeet-tdt-0.6b-fp16");
    assert_eq!(entry.backing_id, "grikdotnet/parakeet-tdt-0.6b-fp16");
    assert_eq!(entry.quantization, Some(Quantization::Fp16));
    assert_eq!(entry.description, "FP16");
}

#[test]
fn test_lookup_unknown_model_is_none() {
    assert!(lookup("unknown-model").is_none());
    assert!(lookup("").is_none());
}

#[test]
fn test_lookup_is_exact_match() {
    // No case folding or prefix matching
    assert!(lookup("PARAKEET-TDT-0.6B-V3").is_none());
    assert!(lookup("parakeet-tdt-0.6b").is_none());
    assert!(lookup("parakeet-tdt-0.6b-v3 ").is_none());
}

#[test]
fn test_resolve_unknown_falls_back_to_default() {
    let entry = resolve("unknown-model");
    assert_eq!(entry.name, "parakeet-tdt-0.6b-v3");
    assert_eq!(entry, ModelRegistry::builtin().default_entry());
}

#[test]
fn test_resolve_known_model_is_unchanged() {
    let entry = resolve("istupakov/parakeet-tdt-0.6b-v3-onnx");
    assert_eq!(
        entry,
        lookup("istupakov/parakeet-tdt-0.6b-v3-onnx").unwrap()
    );
    assert_eq!(entry.description, "FP32");
}

#[test]
fn test_resolve_fallback_emits_debug_event() {
    let (entry, logs) = resolve_with_captured_logs("unknown-model");

    assert_eq!(entry.name, DEFAULT_MODEL);
    assert!(logs.contains("DEBUG"));
    assert!(logs.contains("Unknown model requested, using default"));
    assert!(logs.contains("unknown-model"));
    assert!(logs.contains("parakeet-tdt-0.6b-v3"));
}

#[test]
fn test_resolve_known_model_emits_no_event() {
    let (entry, logs) = resolve_with_captured_logs("grikdotnet/parakeet-tdt-0.6b-fp16");

    assert_eq!(entry.name, "grikdotnet/parakeet-tdt-0.6b-fp16");
    assert!(logs.is_empty());
}

#[test]
fn test_resolve_whisper_falls_back() {
    assert_eq!(resolve("whisper-1").name, DEFAULT_MODEL);
}

#[test]
fn test_default_is_parakeet_not_whisper() {
    let default = ModelRegistry::builtin().default_entry();
    assert_ne!(default.name, "whisper-1");
    assert_eq!(default.name, "parakeet-tdt-0.6b-v3");
    assert_eq!(DEFAULT_MODEL, default.name);
}

#[test]
fn test_resolve_is_idempotent() {
    for name in ["unknown-model", "grikdotnet/parakeet-tdt-0.6b-fp16", ""] {
        assert_eq!(resolve(name), resolve(name));
        assert_eq!(resolve(resolve(name).name), resolve(name));
    }
}

#[test]
fn test_entries_in_catalog_order() {
    let names: Vec<_> = ModelRegistry::builtin().names().collect();
    assert_eq!(
        names,
        vec![
            "parakeet-tdt-0.6b-v3",
            "istupakov/parakeet-tdt-0.6b-v3-onnx",
            "grikdotnet/parakeet-tdt-0.6b-fp16",
        ]
    );
}

#[test]
fn test_every_entry_name_matches_its_key() {
    let registry = ModelRegistry::builtin();
    for entry in registry.entries() {
        assert_eq!(registry.lookup(entry.name), Some(entry));
    }
}

#[test]
fn test_builtin_catalog_is_valid() {
    ModelRegistry::builtin().validate().unwrap();
}

static DUPLICATE_A: ModelEntry = ModelEntry {
    name: "dup",
    backing_id: "a",
    quantization: None,
    description: "A",
};

static DUPLICATE_B: ModelEntry = ModelEntry {
    name: "dup",
    backing_id: "b",
    quantization: None,
    description: "B",
};

static EMPTY_BACKING: ModelEntry = ModelEntry {
    name: "empty-backing",
    backing_id: "",
    quantization: Some(Quantization::Int8),
    description: "INT8",
};

static DUPLICATES: [&ModelEntry; 2] = [&DUPLICATE_A, &DUPLICATE_B];
static EMPTY_BACKING_ONLY: [&ModelEntry; 1] = [&EMPTY_BACKING];
static SINGLE: [&ModelEntry; 1] = [&DUPLICATE_A];

#[test]
fn test_validate_rejects_duplicate_names() {
    let registry = ModelRegistry {
        entries: &DUPLICATES,
        default: &DUPLICATE_A,
    };
    let err = registry.validate().unwrap_err();
    assert!(err.to_string().contains("Duplicate"));
}

#[test]
fn test_validate_rejects_empty_backing_id() {
    let registry = ModelRegistry {
        entries: &EMPTY_BACKING_ONLY,
        default: &EMPTY_BACKING,
    };
    let err = registry.validate().unwrap_err();
    assert!(err.to_string().contains("backing id"));
}

#[test]
fn test_validate_rejects_default_outside_catalog() {
    let registry = ModelRegistry {
        entries: &SINGLE,
        default: &EMPTY_BACKING,
    };
    let err = registry.validate().unwrap_err();
    assert!(err.to_string().contains("not in the catalog"));
}

#[test]
fn test_quantization_labels() {
    assert_eq!(Quantization::Int8.to_string(), "int8");
    assert_eq!(Quantization::Fp16.to_string(), "fp16");
    assert_eq!(Quantization::label(None), "none");
    assert_eq!(Quantization::label(Some(Quantization::Fp16)), "fp16");
}

#[test]
fn test_quantization_from_str() {
    assert_eq!("int8".parse::<Quantization>().unwrap(), Quantization::Int8);
    assert_eq!("fp16".parse::<Quantization>().unwrap(), Quantization::Fp16);
    assert!("fp32".parse::<Quantization>().is_err());
    assert!("INT8".parse::<Quantization>().is_err());
}
