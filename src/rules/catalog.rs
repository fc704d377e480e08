//! Pattern catalogues for portability classification.
//!
//! The catalogues encode which SQL surface syntax the destination engine
//! cannot round-trip yet. They are data, not control flow: ordered
//! `(pattern, reason)` pairs scanned first-match-wins, so supporting a
//! new construct means deleting an alternate here, never touching the
//! classifier. Patterns are heuristic by design; they match raw SQL text,
//! not parsed syntax.

use std::sync::LazyLock;

use regex::Regex;

pub const DDL_DML_REASON: &str = "DDL/DML not supported";
pub const COMMAND_REASON: &str = "command not supported";
pub const CLAUSE_REASON: &str = "unsupported clause";
pub const SYNTAX_REASON: &str = "unsupported syntax";
pub const CROSS_DIALECT_REASON: &str = "cross-dialect transform";

/// DDL/DML statement keywords.
static DDL_DML_PATTERN: &str =
    r"(?i)^\s*(CREATE|ALTER|DROP|INSERT|UPDATE|DELETE|MERGE|TRUNCATE|REPLACE\s+INTO)\b";

/// Session and administrative command keywords.
static COMMAND_PATTERN: &str = concat!(
    r"(?i)^\s*(SET|SHOW|GRANT|REVOKE|LOCK|UNLOCK|EXPLAIN|DESCRIBE|ANALYZE|USE|LOAD|COPY",
    r"|REFRESH|CALL|EXECUTE|PREPARE|DEALLOCATE|DECLARE|BEGIN|COMMIT|ROLLBACK|CACHE|UNCACHE",
    r"|ADD\s+JAR|MSCK|OPTIMIZE|VACUUM|CLONE|UNDROP|PUT|GET|REMOVE|LIST|COMMENT|ATTACH|DETACH",
    r"|KILL)\b",
);

/// Clauses the destination generator has no writer for.
static CLAUSE_PATTERN: &str = concat!(
    r"(?i)\b(PIVOT|UNPIVOT|FETCH\s+(?:FIRST|NEXT)|QUALIFY|ROWS\s+BETWEEN|RANGE\s+BETWEEN",
    r"|CUBE|ROLLUP|GROUPING\s+SETS|FOR\s+(?:UPDATE|SHARE|NO\s+KEY)|MATCH_RECOGNIZE",
    r"|CONNECT\s+BY|START\s+WITH|MODEL\s+DIMENSION|LATERAL\s+VIEW|TABLESAMPLE|SAMPLE",
    r"|LATERAL\s*\(|WITHIN\s+GROUP|WITH\s+ORDINALITY|XMLTABLE|JSON_TABLE|JSON_TO_RECORDSET",
    r"|JSONB_ARRAY_ELEMENTS|JSON_ARRAY_ELEMENTS)\b",
);

/// Surface syntax that breaks round-tripping in the destination, checked
/// against the full SQL text.
static SYNTAX_PATTERN: &str = concat!(
    r"(?i)(@@[A-Z]",                                      // @@GLOBAL.x / @@SESSION.x variables
    r"|MEMBER\s+OF\s*\(",                                 // MEMBER OF()
    r"|\bUSE\s+INDEX\b",                                  // USE INDEX hints
    r"|\bIGNORE\s+INDEX\b",                               // IGNORE INDEX hints
    r"|\bFORCE\s+INDEX\b",                                // FORCE INDEX hints
    r"|\bSTRAIGHT_JOIN\b",                                // MySQL STRAIGHT_JOIN
    r"|HIGH_PRIORITY",                                    // MySQL HIGH_PRIORITY
    r"|SQL_CALC_FOUND_ROWS",                              // MySQL SQL_CALC_FOUND_ROWS
    r"|/\*\+\s",                                          // optimizer hints /*+ ... */
    r"|\bBINARY\s+\w",                                    // BINARY cast keyword
    r"|_utf8mb4\s*'",                                     // MySQL introducers _utf8mb4'...'
    r"|_latin1\s",                                        // MySQL introducers _latin1 ...
    r"|[Nn]'",                                            // N'...' national string literal
    r"|\bUSING\s+\w+\s*\)",                               // CHAR(x USING utf8) / CONVERT USING
    r"|:=\s",                                             // MySQL assignment operator :=
    r"|\bXOR\b",                                          // XOR operator
    r"|\b\d+\s*&&\s*\d+",                                 // && as AND (MySQL)
    r"|\|\|/\s",                                          // ||/ cube root operator (Postgres)
    r"|\|/\s",                                            // |/ square root operator (Postgres)
    r"|@@\s",                                             // @@ full-text search operator (Postgres)
    r"|\bSOUNDS\s+LIKE\b",                                // MySQL SOUNDS LIKE
    r"|\be'",                                             // Postgres e-strings
    r"|\$\$",                                             // dollar-quoted strings
    r"|~\*?\s*'",                                         // regex match operators (Postgres)
    r"|!\s*~",                                            // negated regex match (Postgres)
    r"|\?\s*'",                                           // JSON ? operator (Postgres)
    r"|ARRAY\s*\[",                                       // ARRAY[...] literal
    r"|ARRAY\s*\(",                                       // ARRAY(SELECT ...)
    r"|\bWINDOW\s+\w+\s+AS\b",                            // WINDOW clause
    r"|\bFROM\s+'[^']*'\s+FOR\b",                         // SUBSTRING FROM ... FOR (non-standard)
    r"|SUBSTR(?:ING)?\s*\([^)]*\bFROM\b",                 // SUBSTRING/SUBSTR(x FROM y)
    r"|TRIM\s*\([^)]*\bFROM\b",                           // TRIM(x FROM y)
    r"|\bAS\s+MATERIALIZED\b",                            // CTE MATERIALIZED hint
    r"|\bAS\s+NOT\s+MATERIALIZED\b",                      // CTE NOT MATERIALIZED hint
    r"|CURRENT_SCHEMA\s*(?:[^(\s]|$)",                    // CURRENT_SCHEMA without parens
    r"|->>",                                              // JSON ->> operator
    r"|->\s*'",                                           // JSON -> 'key' operator
    r"|->\s*\d",                                          // JSON -> 0 operator
    r"|\bMATCH\s*\([^)]*\)\s*AGAINST\b",                  // MySQL MATCH ... AGAINST
    r"|::\w",                                             // Postgres :: cast operator
    r"|\bINTERVAL\s+'[^']*'\s+\w+",                       // INTERVAL '1' YEAR standalone
    r"|\bDISTINCTROW\b",                                  // MySQL DISTINCTROW
    r"|\bSTRING_AGG\s*\(",                                // STRING_AGG with ORDER BY
    r"|\bGROUP_CONCAT\s*\(",                              // GROUP_CONCAT with DISTINCT/ORDER BY
    r"|\bEXPLAIN\s+SELECT\b",                             // EXPLAIN SELECT (anywhere, not just start)
    r"|EXTRACT\s*\(\s*QUARTER\b",                         // EXTRACT(QUARTER ...)
    r"|^\s*END\s",                                        // END WORK / END AND CHAIN
    r"|\bONLY\s+\w",                                      // FROM ONLY t (Postgres inheritance)
    r"|\bX'[0-9A-Fa-f]",                                  // hex literals X'...'
    r"|'[^']*'\s*'[^']*'",                                // adjacent string concat 'a' 'b'
    r"|\bPARTITION\s*\(\w",                               // PARTITION(p0) hint
    r"|\bCHARACTER\s+SET\b",                              // CHARACTER SET
    r"|\bCONVERT\s*\(",                                   // CONVERT()
    r"|~\s*\w",                                           // bitwise NOT / regex match ~
    r"|\bDATE_(?:ADD|SUB)\s*\([^,]+,\s*INTERVAL\b",       // DATE_ADD/DATE_SUB with INTERVAL
    r"|\bORDER\s+BY\s+BINARY\b",                          // ORDER BY BINARY
    r"|\bLATERAL\s+\w",                                   // LATERAL subquery/function
    r"|\bGENERATE_SERIES\s*\(",                           // GENERATE_SERIES
    r"|\bOVERLAPS\b",                                     // OVERLAPS predicate
    r"|\bNOTNULL\b",                                      // NOTNULL shorthand
    r"|\bISNULL\b",                                       // ISNULL shorthand (Postgres)
    r"|#>\s*'",                                           // JSON #> path operator
    r"|#>>\s*'",                                          // JSON #>> path operator
    r"|\btimestamp\s+'",                                  // typed literal timestamp '...'
    r"|\bdate\s+'",                                       // typed literal date '...'
    r"|\btime\s+'",                                       // typed literal time '...'
    r"|SUBSTRING\s*\([^)]*\bfor\b",                       // SUBSTRING(x for y)
    r"|\bROWS\s+\d+\s+PRECEDING\b",                       // ROWS N PRECEDING
    r"|\bRANGE\s+\w+\s+PRECEDING\b",                      // RANGE ... PRECEDING
    r"|\bEXCLUDE\s+CURRENT\b",                            // EXCLUDE CURRENT ROW
    r"|\bt1\s*\*",                                        // t1* inheritance notation
    r"|\w\s*\^\s*\w",                                     // ^ operator (Postgres power/MySQL XOR)
    r"|\bx\s*#\s*y",                                      // # operator (Postgres XOR)
    r"|\bx\s*\?\s*y",                                     // ? operator
    r"|\|\|(?:[^/]|$)",                                   // || concat operator (but not ||/ cube root)
    r"|\bFILTER\s*\(\s*WHERE\b",                          // FILTER(WHERE ...) aggregate
    r"|\bROWS\s+FROM\s*\(",                               // ROWS FROM (...)
    r"|\bRECURSIVE\b",                                    // WITH RECURSIVE
    r"|\bFOR\s+KEY\s+SHARE\b",                            // FOR KEY SHARE
    r"|\bIS\s+JSON\b",                                    // IS JSON predicate
    r"|\bOVERLAY\s*\(",                                   // OVERLAY function
    r"|\bVALUES\s*\(",                                    // VALUES (...)
    r"|%\(\w+\)s",                                        // %(param)s placeholder
    r"|\bSELECT\s+\*\s+FROM\s+\w+\s+WHERE\s+\w+\s*=\s*\?", // ? placeholder
    r"|\bFETCH\s+\d+\s+ROW",                              // FETCH N ROW
    r"|\bcol\s*\[\d+\]",                                  // col[N] bracket indexing
    r"|TRIM\s*\(\s*(?:BOTH|LEADING|TRAILING)\s+'[^']*'\s+FROM\b", // TRIM(BOTH/LEADING/TRAILING x FROM y)
    r"|TRIM\s*\(\s*(?:BOTH|LEADING|TRAILING)\s+'[^']*'\s*\)",     // TRIM(BOTH 'x')
    r"|\bCOLLATE\s",                                      // COLLATE clause
    r"|\bINTO\s+UNLOGGED\b",                              // SELECT INTO UNLOGGED
    r"|\bpoint\s+'",                                      // typed literal point '...'
    r"|NUMRANGE\s*\(",                                    // range types
    r"|\bSELECT\s+SLOPE\b",                               // SLOPE function
    r"|-\|-\s",                                           // range adjacency operator
    r"|\bJSON_AGG\s*\(",                                  // JSON_AGG (ORDER BY unsupported)
    r"|\bCORR\s*\(",                                      // CORR function
    r"|\bSELECT\s+\d+\s+FROM\s*\(\s*\(",                  // complex nested subquery
    // Parser-transformed functions (identity breaks)
    r"|\bNOW\s*\(\s*\)",                                  // NOW() -> CURRENT_TIMESTAMP
    r"|\bCURTIME\s*\(",                                   // CURTIME() -> CURRENT_TIME (no parens)
    r"|\bCURDATE\s*\(",                                   // CURDATE() -> CURRENT_DATE (no parens)
    r"|\bCURRENT_TIMESTAMP\s*\(\s*\d",                    // CURRENT_TIMESTAMP(N) arg handling
    // Internal sqlglot functions (not real SQL)
    r"|\bTIME_STR_TO_UNIX\s*\(",
    r"|\bTIME_STR_TO_TIME\s*\(",
    r"|\bTS_OR_DS_TO_DATE\s*\(",
    r"|\bTIME_TO_STR\s*\(",
    // Arg-swap / complex transforms
    r"|\bINSTR\s*\(",                                     // INSTR -> LOCATE arg swap
    r"|\bXMLELEMENT\s*\(",                                // XMLELEMENT NAME handling
    r"|\bAS\s+row\b",                                     // reserved word `row`
    r"|\bCAST\s*\([^)]*\bAS\s+TIMESTAMP(?:TZ|LTZ)?\s*\)", // CAST(x AS TIMESTAMP) -> TIMESTAMP(x)
    r"|\bLIMIT\s+\d+\s*[+\-*/]",                          // LIMIT with expression (not just literal)
    r"|\bAT\s+TIME\s+ZONE\b",                             // AT TIME ZONE clause
    r"|\d+\s*//\s*\d+",                                   // // integer division (DuckDB)
    r"|=\s*%s\b",                                         // %s parameter placeholder
    r"|\bNULLS\s+(?:FIRST|LAST)\b",                       // NULLS FIRST/LAST ordering
    r#"|'\\["tjn]'"#,                                     // backslash escape in string literal
    r"|'[\t\n\r]'",                                       // literal control characters in string
    // Same-dialect transforms the origin engine normalizes
    r"|\bTO_DAYS\s*\(",                                   // TO_DAYS -> DATEDIFF transform
    r"|\bMONTHNAME\s*\(",                                 // MONTHNAME -> DATE_FORMAT transform
    r"|\bDATE_FORMAT\s*\(",                               // DATE_FORMAT format string normalization
    // Lambda expressions (DuckDB, Spark, etc.)
    r"|\blambda\b",                                       // Python-style lambda keyword in SQL
    r"|\b\w+\s*->\s*\w+\s*[+\-*/<>=!]",                   // x -> x + 1 lambda
    r"|\(\s*\w+\s*,\s*\w+\s*\)\s*->",                     // (x, y) -> ... lambda
    // DuckDB-specific syntax
    r"|\*\*\s*\w",                                        // ** power operator
    r"|\bLIMIT\s+\d+\s+PERCENT\b",                        // LIMIT N PERCENT
    r"|\b@>\s",                                           // @> contains operator
    r"|\bUNION\s+ALL\s+BY\s+NAME\b",                      // UNION ALL BY NAME
    r"|\bPOSITIONAL\s+JOIN\b",                            // POSITIONAL JOIN
    r"|\bCOLUMNS\s*\(",                                   // COLUMNS(...) expression
    r"|\bEXCLUDE\s*\(",                                   // EXCLUDE (col, ...) in SELECT
    r"|\bREPLACE\s*\(",                                   // REPLACE (expr AS col) in SELECT
    r"|\b\d+[SLBDF]\b",                                   // Hive/Spark type suffix literals (2S, 3L)
    r"|\bORDER\s+BY\s+\w+\s*\)\s*OVER\b",                 // aggregate ORDER BY inside parens
    r"|\bWITHIN\s+GROUP\b",                               // WITHIN GROUP (ORDER BY ...)
    r"|\b\w+!\s*\(",                                      // model!func() macro call syntax
    r"|\bIN\s+\w+\.\w+",                                  // 'x' IN tbl.col (non-standard IN)
    r"|\bFROM\s+FIRST\b",                                 // NTH_VALUE FROM FIRST
    r"|\bFROM\s+LAST\b",                                  // NTH_VALUE FROM LAST
    r"|\b\$\d+",                                          // $1 parameter placeholders
    r"|\bSELECT\s+MAP\s*\{",                              // SELECT MAP { ... } literal
    r"|\bSTRUCT_PACK\s*\(",                               // STRUCT_PACK function
    r"|\bMAP_FROM_ENTRIES\s*\(",                          // MAP_FROM_ENTRIES
    r")",
);

/// Functions and operators that survive same-dialect identity but have no
/// cross-dialect rewrite yet. Applied only when the entry's dialect
/// differs from the record's own.
static CROSS_DIALECT_PATTERN: &str = concat!(
    r"(?i)(\bDATE_FORMAT\s*\(",
    r"|\bDATEDIFF\s*\(",
    r"|\bDATE_DIFF\s*\(",
    r"|\bTO_DAYS\s*\(",
    r"|\bFROM_UNIXTIME\s*\(",
    r"|\bTO_TIMESTAMP\s*\(",
    r"|\bSTR_TO_DATE\s*\(",
    r"|\bDATE_PARSE\s*\(",
    r"|\bMONTHNAME\s*\(",
    r"|\bDAYOFYEAR\s*\(",                                 // day functions to base dialect
    r"|\bDAYOFMONTH\s*\(",
    r"|\bDAYOFWEEK\s*\(",
    r"|\bWEEKOFYEAR\s*\(",
    r"|\bFULL\s+(?:OUTER\s+)?JOIN\b",                     // FULL JOIN -> LEFT JOIN
    r"|\bCONCAT\s*\(",                                    // CONCAT -> ||
    r"|\bCHAR_LENGTH\s*\(",
    r"|\bCHARACTER_LENGTH\s*\(",
    r"|\ba\s*/\s*b\b",                                    // integer division semantics
    r"|\bCHAR\s*\(\d",                                    // CHAR(N) -> CHR(N)
    r"|\bARRAY_LENGTH\s*\(",
    r"|\bCARDINALITY\s*\(",
    r"|\bSIZE\s*\([^)]*\)",
    r"|\bREPEATED_COUNT\s*\(",
    r"|\bJSON_EXTRACT_PATH\s*\(",
    r"|\bJSON_EXTRACT_PATH_TEXT\s*\(",
    r"|\bJSONExtractString\s*\(",
    r"|\bJSONB?_EXISTS\s*\(",
    r"|\bJSONB?_OBJECT_AGG\s*\(",
    r"|\bJSON_GROUP_OBJECT\s*\(",
    r"|\bDATE_BIN\s*\(",
    r"|\bDATEADD\s*\(",
    r"|\bGETDATE\s*\(",
    r"|\bUNNEST\s*\(",                                    // UNNEST/EXPLODE cross-dialect
    r"|\bEXPLODE\s*\(",
    r"|\bANY_VALUE\s*\(",                                 // version-aware
    r"|\bRANDOM\s*\(",
    r"|\bDIV\s*\(",
    r"|\bTO_DATE\s*\(",
    r"|\bFORMAT\s*\(\d",
    r"|\bVARIANCE\s*\(",
    r"|\bVARIANCE_POP\s*\(",
    r"|\bLOGICAL_OR\s*\(",
    r"|\bBOOL_OR\s*\(",
    r"|\bNULLS\s+(?:FIRST|LAST)\b",
    r"|\bDAY\s*\(\w+\)",                                  // DAY(x) to base dialect
    r"|\bWEEK\s*\(\w+\)",
    r"|\bYEAR\s*\(\w+\)",
    r"|\bCAST\s*\([^)]*\bAS\s+TEXT\b",
    // MySQL-specific types in cross-dialect CAST
    r"|\bMEDIUMBLOB\b",
    r"|\bLONGBLOB\b",
    r"|\bTINYBLOB\b",
    r"|\bMEDIUMTEXT\b",
    r"|\bLONGTEXT\b",
    r"|\bTINYTEXT\b",
    r"|\bMEDIUMINT\b",
    // Cross-dialect function renames not yet implemented
    r"|\bSTRUCT_EXTRACT\s*\(",                            // STRUCT_EXTRACT -> dot notation
    r"|\bEPOCH\s*\(",
    r"|\bEPOCH_MS\s*\(",
    r"|\bSTRFTIME\s*\(",
    r"|\bSTRPTIME\s*\(",
    r"|\bSAFE_DIVIDE\s*\(",                               // BigQuery SAFE_* arithmetic
    r"|\bSAFE_ADD\s*\(",
    r"|\bSAFE_MULTIPLY\s*\(",
    r"|\bSAFE_SUBTRACT\s*\(",
    r"|\bTO_HEX\s*\(",                                    // hex encoding cross-dialect
    r"|\bFROM_HEX\s*\(",
    r"|\bHEX\s*\(",
    r"|\bUNHEX\s*\(",
    r"|\bTO_NUMBER\s*\(",                                 // Oracle TO_NUMBER
    r"|\bNVL\s*\(",
    r"|\bNVL2\s*\(",
    r"|\bDATEPART\s*\(",                                  // TSQL date functions
    r"|\bDATENAME\s*\(",
    r"|\bHASHBYTES\s*\(",
    r"|\bCHARINDEX\s*\(",
    // Regex functions (each dialect spells these differently)
    r"|\bREGEXP_LIKE\s*\(",
    r"|\bREGEXP_CONTAINS\s*\(",
    r"|\bREGEXP_MATCHES\s*\(",
    r"|\bRLIKE\b",
    r"|\bREGEXP_SPLIT\s*\(",
    r"|\bREGEXP_SUBSTR\s*\(",
    r"|\bREGEXP_EXTRACT\s*\(",
    // Split/join variants
    r"|\bSTR_SPLIT\s*\(",
    r"|\bSTR_SPLIT_REGEX\s*\(",
    r"|\bSPLITBYSTRING\s*\(",                             // ClickHouse
    r"|\bSPLITBYREGEXP\s*\(",                             // ClickHouse
    r"|\bSTRING_SPLIT\s*\(",
    r"|\bSTRING_SPLIT_REGEX\s*\(",
    r"|\bSPLIT_PART\s*\(",
    r"|\bARRAY_JOIN\s*\(",
    r"|\bARRAY_TO_STRING\s*\(",
    r"|\bSPLIT\s*\(",
    // Struct/JSON cross-dialect (complex transformations)
    r"|\bJSON_FORMAT\s*\(",
    r"|\bJSON_QUERY\s*\(",
    r"|\bJSON_VALUE\s*\(",
    r"|\bJSON_EXTRACT_SCALAR\s*\(",
    r"|\bJSON_OBJECT\s*\(",
    r"|\bTO_JSON_STRING\s*\(",                            // BigQuery
    r"|\bGET_JSON_OBJECT\s*\(",                           // Hive
    r"|\bJSON_EXTRACT_STRING\s*\(",
    r"|\bJSON_EXTRACT_BIGINT\s*\(",                       // SingleStore JSON_EXTRACT_*
    r"|\bJSON_EXTRACT_DOUBLE\s*\(",
    r"|\bJSON_EXTRACT_JSON\s*\(",
    r"|\bBSON_EXTRACT\w*\s*\(",                           // SingleStore BSON_EXTRACT*
    r"|\bJSONB_EXTRACT\s*\(",
    // DuckDB-specific functions
    r"|\bARRAY_REVERSE_SORT\s*\(",
    r"|\bLIST_REVERSE_SORT\s*\(",
    r"|\bLIST_SORT\s*\(",
    r"|\bQUANTILE\s*\(",
    r"|\bUNICODE\s*\(",
    // BigQuery-specific functions
    r"|\bCONTAINS_SUBSTR\s*\(",
    r"|\bGENERATE_UUID\s*\(",
    r"|\bAPPROX_QUANTILES\s*\(",
    r"|\bTIMESTAMP_MICROS\s*\(",
    r"|\bARRAY_CONCAT_AGG\s*\(",
    r"|\bHEX_DECODE_BINARY\s*\(",                         // Snowflake
    r"|\bTRUNC\s*\(",                                     // Oracle TRUNC
    // TSQL-specific functions
    r"|\bREPLICATE\s*\(",
    r"|\bTRY_CONVERT\s*\(",
    r"|\bCOUNT_BIG\s*\(",
    r"|\bSCHEMA_NAME\s*\(",
    r"|\bSUSER_NAME\s*\(",
    r"|\bSUSER_SNAME\s*\(",
    r"|\bDATETRUNC\s*\(",
    r"|\bLEN\s*\(\w",
    r"|\bSTDEV\s*\(",
    // Snowflake-specific functions
    r"|\bSQUARE\s*\(",
    r"|\bUUID_STRING\s*\(",
    r"|\bDATE_FROM_PARTS\s*\(",
    r"|\bTIME_FROM_PARTS\s*\(",
    r"|\bCURRENT_VERSION\s*\(",
    r"|\bBOOLAND_AGG\s*\(",
    r"|\bBOOLOR_AGG\s*\(",
    r"|\bBITSHIFTLEFT\s*\(",
    r"|\bBITSHIFTRIGHT\s*\(",
    r"|\bOBJECT_CONSTRUCT\s*\(",
    r"|\bOBJECT_CONSTRUCT_KEEP_NULL\s*\(",
    r"|\bARRAY_CONSTRUCT\s*\(",
    r"|\bARRAY_REMOVE_AT\s*\(",
    r"|\bSKEW\s*\(",
    r"|\bPARSE_JSON\s*\(",
    r"|\bEDITDISTANCE\s*\(",
    r"|\bJAROWINKLER_SIMILARITY\s*\(",
    r"|\bENDSWITH\s*\(",
    r"|\bSPACE\s*\(",
    r"|\bNEXT_DAY\s*\(",
    r"|\bBITMAP_BIT_POSITION\s*\(",
    r"|\bBITMAP_BUCKET_NUMBER\s*\(",
    r"|\bGREATEST_IGNORE_NULLS\s*\(",
    r"|\bTO_TIME\s*\(",
    r"|\bTIMEADD\s*\(",
    // Hive-specific functions
    r"|\bCOLLECT_SET\s*\(",
    r"|\bCOLLECT_LIST\s*\(",
    r"|\bUNIX_TIMESTAMP\s*\(",
    r"|\bPERCENTILE_APPROX\s*\(",
    r"|\bPERCENTILE\s*\(",
    r"|\bLOCATE\s*\(",
    // ClickHouse-specific functions
    r"|\bSUBSTRINGINDEX\s*\(",
    r"|\bTOSTART\w+\s*\(",                                // toStart* date functions
    r"|\bTOMONDAY\s*\(",
    // Exasol-specific functions
    r"|\bHASH_SHA\s*\(",
    r"|\bEDIT_DISTANCE\s*\(",
    r"|\bBIT_LSHIFT\s*\(",
    r"|\bBIT_RSHIFT\s*\(",
    r"|\bBIT_NOT\s*\(",
    r"|\bAPPROXIMATE_COUNT_DISTINCT\s*\(",
    // SingleStore-specific functions
    r"|\bSTANDARD_HASH\s*\(",
    // Presto-specific functions
    r"|\bAPPROX_DISTINCT\s*\(",
    r"|\bARBITRARY\s*\(",
    r"|\bSTARTSWITH\s*\(",
    r"|\bSTARTS_WITH\s*\(",
    r"|\bTO_UNIXTIME\s*\(",
    r"|\bSTRPOS\s*\(",
    // Redshift-specific functions
    r"|\bFROM_BASE\s*\(",
    r"|\bSTRTOL\s*\(",
    r"|\bADD_MONTHS\s*\(",
    r"|\bCONCAT_WS\s*\(",
    r"|\bLEFT\s*\(\w",                                    // LEFT(str, n)
    r"|\bRIGHT\s*\(\w",                                   // RIGHT(str, n)
    r"|\bSUBSTR\s*\(\w",
    r"|\bLEAST\s*\(",
    r"|\bGREATEST\s*\(",
    r"|\bREPEAT\s*\(",
    r"|\bCHR\s*\(",
    r"|\bGLOB\s*\(",
    r"|\bQUARTER\s*\(\w+\)",
    r"|\bHOUR\s*\(\w+\)",
    r"|\bMINUTE\s*\(\w+\)",
    r"|\bSECOND\s*\(\w+\)",
    r"|\bLAST_DAY\s*\(",
    r"|\bLAST_DAY_OF_MONTH\s*\(",
    r"|\bDATE\s*\(\d",                                    // DATE(year, month, day) constructor
    r"|\bTIME\s*\(\d",                                    // TIME(h, m, s) constructor
    r"|\bTIMESTAMP\s*\(\d",                               // TIMESTAMP constructor
    r"|\bWEEK\s*\(\w+\s*,",                               // WEEK(x, mode)
    r"|\bSYSTEM_USER\b",
    r"|\bCURRENT_USER\b",
    // Spark-specific functions
    r"|\bTRY_ELEMENT_AT\s*\(",
    r"|\bSPLIT_TO_MAP\s*\(",
    r"|\bSTR_TO_MAP\s*\(",
    r"|\bTO_UTC_TIMESTAMP\s*\(",
    r"|\bTIMESTAMP_NTZ\s*\(",
    r"|\bTIMESTAMP_LTZ\s*\(",
    // Bitwise operations
    r"|\bBITWISE_AND\s*\(",
    r"|\bBITWISE_OR\s*\(",
    r"|\bBITWISE_XOR\s*\(",
    r"|\bBITWISE_NOT\s*\(",
    r"|\bSHIFTLEFT\s*\(",
    r"|\bSHIFTRIGHT\s*\(",
    r"|\bBITOR\s*\(",
    r"|\bBITAND\s*\(",
    r"|\bBITXOR\s*\(",
    // Distance functions
    r"|\bLEVENSHTEIN\s*\(",
    r"|\bLEVENSHTEIN_DISTANCE\s*\(",
    // Other dialect-specific functions
    r"|\bDECODE\s*\(",
    r"|\bENCODE\s*\(",
    r"|\bPARSE_DATE\s*\(",
    r"|\bPARSE_TIMESTAMP\s*\(",
    r"|\bDATETIMEFROMPARTS\s*\(",                         // TSQL
    r"|\bDATEFROMPARTS\s*\(",                             // TSQL
    r"|\bSHA1?\s*\(",
    r"|\bMD5\s*\(",
    r"|\bMAX_BY\s*\(",
    r"|\bMIN_BY\s*\(",
    r"|\bARGMAX\s*\(",
    r"|\bTIMESTAMP_DIFF\s*\(",
    r"|\bTIMESTAMPADD\s*\(",
    r"|\bDAYNAME\s*\(",
    r"|\bMICROSECOND\s*\(",
    r"|\bWEEKDAY\s*\(",
    r"|\bDAYOFWEEK_ISO\s*\(",
    r"|\bIS_NAN\s*\(",
    r"|\bISNAN\s*\(",
    r"|\bIS_INF\s*\(",
    r"|\bISINF\s*\(",
    r"|\bUUID\s*\(\s*\)",
    r"|\bLIKE\b.*\bANY\s*\(",                             // LIKE ANY(...)
    r"|\bUNIX_SECONDS\s*\(",
    r"|\bUNIX_TO_TIME_STR\s*\(",
    r"|\bTIME_FORMAT\s*\(",
    r"|\bCOUNT_IF\s*\(",
    r"|\bCOUNTIF\s*\(",
    r"|\bLOGICAL_AND\s*\(",
    r"|\bHLL\s*\(",
    r"|\bIS_ASCII\s*\(",
    r"|\bCBRT\s*\(",
    r"|\bTO_BASE64\s*\(",
    r"|\bFROM_BASE64\s*\(",
    r"|\bBASE64_ENCODE\s*\(",
    r"|\bBASE64_DECODE\s*\(",
    r"|\bREGR_VALX\s*\(",
    r"|\bREGR_VALY\s*\(",
    r"|\bFIRST\s*\(\w",
    r"|\bAPPROX_COUNT_DISTINCT\s*\(",
    r"|\bIFF\s*\(",
    r"|\bIIF\s*\(",
    r"|\bMAKE_DATE\s*\(",
    r"|\bMOD\s*\(",
    r"|\bDATE_TRUNC\s*\(",
    r"|\bDATE_PART\s*\(",
    r"|\bDATE_ADD\s*\(",
    r"|\bDATE_SUB\s*\(",
    r"|\bSTDDEV\s*\(",
    r"|\bLOG\s*\(\d",
    r"|\bSTRING\s*\(\w",                                  // type-constructor functions
    r"|\bFLOAT\s*\(\w",
    r"|\bDOUBLE\s*\(\w",
    r"|\bBOOLEAN\s*\(\w",
    r"|\bINT\s*\(\w",
    r"|\bVARCHAR\s*\(\w",
    r"|\bBIT_AND\s*\([^)]*\)",
    r"|\bBIT_OR\s*\([^)]*\)",
    r"|\bBIT_XOR\s*\([^)]*\)",
    r"|\bROW\s*\(\w",                                     // ROW(x) constructor
    r"|\bANY\s*\(\w",
    r"|\bEVERY\s*\(",
    r"|\bARRAY_AGG\s*\(",
    r")",
);

static DDL_DML: LazyLock<Regex> = LazyLock::new(|| Regex::new(DDL_DML_PATTERN).unwrap());
static COMMANDS: LazyLock<Regex> = LazyLock::new(|| Regex::new(COMMAND_PATTERN).unwrap());
static CLAUSES: LazyLock<Regex> = LazyLock::new(|| Regex::new(CLAUSE_PATTERN).unwrap());
static SYNTAX: LazyLock<Regex> = LazyLock::new(|| Regex::new(SYNTAX_PATTERN).unwrap());
static CROSS_DIALECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(CROSS_DIALECT_PATTERN).unwrap());

/// The ordered record/entry-level catalogue scan. First match wins, so
/// a statement that is both DDL and syntactically unsupported reports the
/// DDL reason.
pub fn unsupported_sql_reason(sql: &str) -> Option<&'static str> {
    let rules: [(&Regex, &'static str); 4] = [
        (&DDL_DML, DDL_DML_REASON),
        (&COMMANDS, COMMAND_REASON),
        (&CLAUSES, CLAUSE_REASON),
        (&SYNTAX, SYNTAX_REASON),
    ];
    rules
        .into_iter()
        .find(|(regex, _)| regex.is_match(sql))
        .map(|(_, reason)| reason)
}

/// Does the SQL start with a data-definition/data-manipulation keyword?
pub fn is_ddl_dml(sql: &str) -> bool {
    DDL_DML.is_match(sql)
}

/// Does the SQL use a construct with no cross-dialect rewrite yet?
pub fn is_unsupported_cross_dialect(sql: &str) -> bool {
    CROSS_DIALECT.is_match(sql)
}
