use super::form::FormState;

/// Desenha a tela do formulário em texto: título, erro, campos e a lista
/// numerada (os números são usados pelos comandos de editar/deletar).
pub fn render(state: &FormState) -> String {
    let mut lines = vec![
        "User Registration".to_string(),
        "=================".to_string(),
    ];

    if let Some(error) = &state.error_message {
        lines.push(format!("! {}", error));
    }

    lines.push(format!("Username: {}", state.username));
    lines.push(format!("Email:    {}", state.email));
    lines.push(format!("[{}]", if state.is_editing() { "Update" } else { "Register" }));

    lines.push(String::new());
    lines.push("Registered Users".to_string());
    lines.push("----------------".to_string());

    for (index, user) in state.users.iter().enumerate() {
        lines.push(format!("{}. {} ({})", index + 1, user.username, user.email));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
