use super::const_error;

const_error!(INTERNAL, INTERNAL_SERVER_ERROR, 0, "internal server error");
const_error!(
    JSON_MISSING_FIELDS,
    UNPROCESSABLE_ENTITY,
    1,
    "missing fields"
);
const_error!(JSON_SYNTAX_ERROR, BAD_REQUEST, 2, "syntax error");
const_error!(
    JSON_CONTENT_TYPE,
    BAD_REQUEST,
    3,
    "missing or wrong content-type"
);
const_error!(
    FORM_CONTENT_TYPE,
    BAD_REQUEST,
    4,
    "expected a form or json body"
);
const_error!(FORM_INVALID, BAD_REQUEST, 5, "form data could not be decoded");
const_error!(DATABASE_ERROR, INTERNAL_SERVER_ERROR, 6, "database error");
const_error!(QUERY_INVALID, BAD_REQUEST, 7, "query string could not be decoded");
