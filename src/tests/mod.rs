mod properties;
mod source;
