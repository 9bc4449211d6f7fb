//! Login form update logic

use crate::message::LoginMessage;
use crate::model::App;

/// Handle a login form message
pub fn update(app: &mut App, msg: LoginMessage) {
    let login = &mut app.login;
    if login.submitting {
        return;
    }

    match msg {
        LoginMessage::NextField => login.focus = login.focus.toggle(),
        LoginMessage::Input(ch) => login.focused_value_mut().push(ch),
        LoginMessage::Backspace => {
            login.focused_value_mut().pop();
        }
        LoginMessage::ToggleSecrets => login.show_password = !login.show_password,
        LoginMessage::Submit => {
            if !login.can_submit() {
                login.errors = vec!["Email and password are required.".to_string()];
                return;
            }
            login.submitting = true;
            login.errors.clear();
            let request = login.request();
            app.set_status("Signing in...");
            app.backend.login(request);
        }
    }
}
