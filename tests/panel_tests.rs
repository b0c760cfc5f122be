use gomoku_stepper::{
    ClipboardSink, FormFields, Hotkey, InputError, MemorySink, PanelError, PanelEvent, StepError,
    StepperPanel,
};

#[test]
fn test_starts_closed_and_rejects_input() {
    let mut panel = StepperPanel::new(MemorySink::new());
    assert!(!panel.is_open());
    assert!(matches!(
        panel.fill(FormFields::new("H3", "U", "2")),
        Err(PanelError::Closed)
    ));
    assert!(matches!(panel.submit(), Err(PanelError::Closed)));
}

#[test]
fn test_hotkeys_toggle_visibility() {
    let mut panel = StepperPanel::new(MemorySink::new());
    assert_eq!(panel.handle_hotkey(Hotkey::Open), PanelEvent::Opened);
    assert_eq!(panel.handle_hotkey(Hotkey::Open), PanelEvent::AlreadyOpen);
    assert!(panel.is_open());
    assert_eq!(panel.handle_hotkey(Hotkey::Close), PanelEvent::Closed);
    assert_eq!(panel.handle_hotkey(Hotkey::Close), PanelEvent::AlreadyClosed);
    assert!(!panel.is_open());
}

#[test]
fn test_hotkey_parsing() {
    for chord in ["ctrl+h", "Ctrl+H", "CTRL-h", "^H", "c-h", "ctrl + h"] {
        assert_eq!(chord.parse::<Hotkey>().unwrap(), Hotkey::Open, "{}", chord);
    }
    for chord in ["ctrl+b", "Ctrl-B", "^b"] {
        assert_eq!(chord.parse::<Hotkey>().unwrap(), Hotkey::Close, "{}", chord);
    }
    assert!("ctrl+x".parse::<Hotkey>().is_err());
    assert!("h".parse::<Hotkey>().is_err());
}

#[test]
fn test_submit_copies_and_clears() {
    let mut panel = StepperPanel::new(MemorySink::new());
    panel.open();
    panel.fill(FormFields::new("H3", "RU", "5")).unwrap();
    let path = panel.submit().unwrap();
    assert_eq!(path.len(), 5);
    assert_eq!(panel.sink().contents(), Some("H3, I4, J5, K6, L7"));
    assert!(panel.form().is_empty());
    assert!(panel.is_open());
}

#[test]
fn test_failed_submit_keeps_fields() {
    let mut panel = StepperPanel::new(MemorySink::new());
    panel.open();
    let fields = FormFields::new("A1", "L", "2");
    panel.fill(fields.clone()).unwrap();
    let err = panel.submit().unwrap_err();
    assert!(matches!(
        err,
        PanelError::Step(StepError::OutOfBounds { step: 1, .. })
    ));
    assert_eq!(panel.form(), &fields);
    assert_eq!(panel.sink().contents(), None);

    panel.fill(FormFields::new("H3", "U", "")).unwrap();
    assert!(matches!(
        panel.submit().unwrap_err(),
        PanelError::Step(StepError::InvalidInput(InputError::MissingField("steps")))
    ));
}

#[test]
fn test_close_discards_form() {
    let mut panel = StepperPanel::new(MemorySink::new());
    panel.open();
    panel.fill(FormFields::new("H3", "U", "2")).unwrap();
    panel.close();
    panel.open();
    assert!(panel.form().is_empty());
}

struct BrokenSink;

impl ClipboardSink for BrokenSink {
    fn copy(&mut self, _text: &str) -> anyhow::Result<()> {
        Err(anyhow::anyhow!("clipboard unavailable"))
    }
}

#[test]
fn test_sink_failure_surfaces() {
    let mut panel = StepperPanel::new(BrokenSink);
    panel.open();
    panel.fill(FormFields::new("H3", "U", "2")).unwrap();
    let err = panel.submit().unwrap_err();
    assert!(matches!(err, PanelError::Copy(_)));
    assert!(err.to_string().contains("clipboard unavailable"));
    assert!(!panel.form().is_empty());
}

#[test]
fn test_history_across_submits() {
    let mut panel = StepperPanel::new(MemorySink::new());
    panel.open();
    for (start, dir, steps) in [("A1", "R", "3"), ("O15", "LD", "2")] {
        panel.fill(FormFields::new(start, dir, steps)).unwrap();
        panel.submit().unwrap();
    }
    let sink = panel.into_sink();
    assert_eq!(sink.history(), ["A1, B1, C1", "O15, N14"]);
}
