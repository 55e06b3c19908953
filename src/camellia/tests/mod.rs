mod test_camellia_kat;
mod test_camellia_roundtrip;
