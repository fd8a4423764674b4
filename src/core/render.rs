use crate::domain::model::OptionEntry;

/// Builds the full option markup for a select control: the synthetic
/// placeholder (value "0") first, then one option per entry in server
/// order. Ids and labels are emitted verbatim; escaping is the host
/// templating layer's concern. Pure function, no DOM involved.
pub fn render_options(placeholder: &str, entries: &[OptionEntry]) -> String {
    let mut markup = format!("<option value=\"0\">{}</option>", placeholder);

    for entry in entries {
        markup.push_str(&format!(
            "<option value=\"{}\">{}</option>",
            entry.id, entry.label
        ));
    }

    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_placeholder_only() {
        let markup = render_options("Selecione o Estado", &[]);
        assert_eq!(markup, "<option value=\"0\">Selecione o Estado</option>");
    }

    #[test]
    fn test_render_preserves_server_order() {
        let entries = vec![
            OptionEntry::new("11", "South"),
            OptionEntry::new("10", "North"),
        ];
        let markup = render_options("Selecione o Estado", &entries);

        assert_eq!(
            markup,
            "<option value=\"0\">Selecione o Estado</option>\
             <option value=\"11\">South</option>\
             <option value=\"10\">North</option>"
        );
    }

    #[test]
    fn test_render_is_verbatim() {
        // No escaping beyond what the host templating applies
        let entries = vec![OptionEntry::new("5", "São Paulo & Região")];
        let markup = render_options("Carregando...", &entries);
        assert!(markup.contains("<option value=\"5\">São Paulo & Região</option>"));
    }
}
