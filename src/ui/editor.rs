use fltk::text::{TextBuffer, TextEditor};
use fltk::prelude::*;

use crate::app::domain::ports::ContentPort;

/// The FLTK text editor as the document's content source and sink.
#[derive(Clone)]
pub struct EditorContent {
    editor: TextEditor,
}

impl EditorContent {
    pub fn new(editor: &TextEditor) -> Self {
        Self {
            editor: editor.clone(),
        }
    }

    fn buffer(&self) -> TextBuffer {
        match self.editor.buffer() {
            Some(buf) => buf,
            None => {
                let buf = TextBuffer::default();
                let mut editor = self.editor.clone();
                editor.set_buffer(buf.clone());
                buf
            }
        }
    }
}

impl ContentPort for EditorContent {
    fn get_contents(&self) -> String {
        self.buffer().text()
    }

    fn set_contents(&mut self, text: &str) {
        let mut buf = self.buffer();
        buf.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn clear_contents(&mut self) {
        self.buffer().set_text("");
    }
}
