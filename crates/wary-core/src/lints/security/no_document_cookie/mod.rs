pub(crate) mod no_document_cookie;
