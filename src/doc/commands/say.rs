/*!
# `SAY <text>`
Also `SHOUT`, `WHISPER` and `PRINT`.

## Purpose
Print text.

## Remarks
`SAY` prints the text as is, `SHOUT` in capitals with a `!` added and
`WHISPER` in lower case, each followed by a line ending. `PRINT` prints
the text without a line ending. Quoted text may span several words;
spaces between words are collapsed to one.

## Example
```text
1 PRINT "Hello, "
2 SAY "World"
3 SHOUT "hey"
4 WHISPER "PSST"
5 END
RUN
Hello, World
HEY!
psst
```

*/
