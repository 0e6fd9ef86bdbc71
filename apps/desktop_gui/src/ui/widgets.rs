use eframe::egui;

/// Combo box over `options`; returns the newly picked option, if any.
///
/// An empty `current` shows the placeholder. A current value missing from
/// `options` is still displayed as-is.
pub fn selection_field(
    ui: &mut egui::Ui,
    placeholder: &str,
    id: &str,
    current: &str,
    options: &[impl AsRef<str>],
) -> Option<String> {
    let selected_text: egui::WidgetText = if current.is_empty() {
        egui::RichText::new(placeholder).weak().into()
    } else {
        current.into()
    };

    let mut chosen = current.to_string();
    egui::ComboBox::from_id_salt(id)
        .width(280.0)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for option in options {
                let option = option.as_ref();
                ui.selectable_value(&mut chosen, option.to_string(), option);
            }
        });

    (chosen != current).then_some(chosen)
}
